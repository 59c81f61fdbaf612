//! End-to-end behavior of the project handle and the codegen configurator.

use keel_build::{BuildProject, CodegenConfigurator, CONFIGURATOR_NAME, PROTOBUF_PLUGIN_ID};

#[test]
fn install_registers_extension_and_applies_plugin() {
    let project = BuildProject::new("server", "/work/server");
    assert!(!project.has_plugin(PROTOBUF_PLUGIN_ID));

    CodegenConfigurator::install(&project).unwrap();

    assert!(project.has_plugin(PROTOBUF_PLUGIN_ID));
    assert!(project.extensions().contains(CONFIGURATOR_NAME));
}

#[test]
fn deferred_action_sees_the_configurator() {
    let project = BuildProject::new("server", "/work/server");

    project.with_plugin(PROTOBUF_PLUGIN_ID, |project| {
        let configurator = project
            .extensions()
            .by_type::<CodegenConfigurator>()
            .expect("configurator installed before plugin application");
        configurator.borrow_mut().tasks_mut().all(|task| {
            task.builtins_mut().maybe_create("java");
        });
    });

    let configurator = CodegenConfigurator::install(&project).unwrap();

    // Tasks created after the plugin fired still receive the action.
    configurator.borrow_mut().tasks_mut().create("generateProto");
    let configurator = configurator.borrow();
    let task = configurator.tasks().find("generateProto").unwrap();
    assert!(task.builtins().contains("java"));
}

#[test]
fn repeated_configurator_lookup_yields_one_instance() {
    let project = BuildProject::new("server", "/work/server");
    let installed = CodegenConfigurator::install(&project).unwrap();
    let found = project
        .extensions()
        .get::<CodegenConfigurator>(CONFIGURATOR_NAME)
        .unwrap();
    assert!(std::rc::Rc::ptr_eq(&installed, &found));
}
