/// Integration tests for the direct in-process control surface: the same
/// tool registry the MCP server exposes, driven without any transport.
use std::sync::Arc;
use std::time::Duration;

use jiggly_core::{JigglerController, WorkerConfig, WorkerStatus};
use jiggly_mcp::build_mcp_registry;
use jiggly_tools::{ToolCall, ToolRegistry};
use serde_json::json;

fn script_controller(body: &str) -> (tempfile::TempDir, Arc<JigglerController>) {
    use std::os::unix::fs::PermissionsExt;

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("worker.sh");
    std::fs::write(&path, format!("#!/bin/sh\n{body}\n")).unwrap();
    let mut perms = std::fs::metadata(&path).unwrap().permissions();
    perms.set_mode(0o755);
    std::fs::set_permissions(&path, perms).unwrap();

    let controller = Arc::new(JigglerController::new(WorkerConfig {
        command: path.to_string_lossy().into_owned(),
        args: Vec::new(),
        stop_timeout: Duration::from_millis(300),
    }));
    (dir, controller)
}

async fn run(reg: &ToolRegistry, name: &str, args: serde_json::Value) -> String {
    let out = reg
        .execute(&ToolCall {
            id: format!("direct-{name}"),
            name: name.to_string(),
            args,
        })
        .await;
    assert!(!out.is_error, "{name} failed: {}", out.content);
    out.content
}

#[tokio::test]
async fn full_session_through_the_tool_registry() {
    let (_dir, controller) = script_controller("sleep 60");
    let reg = build_mcp_registry(controller.clone(), None);

    let wake = run(&reg, "wake_up_jiggly", json!({ "interval": 10, "offset": 2 })).await;
    assert!(wake.contains("interval=10s"));
    assert!(wake.contains("offset=2px"));

    let status = run(&reg, "check_jiggly_status", json!({})).await;
    assert!(status.contains("jiggling with PID"));

    let sleep = run(&reg, "put_jiggly_to_sleep", json!({})).await;
    assert!(sleep.contains("put to sleep successfully"));

    let after = run(&reg, "check_jiggly_status", json!({})).await;
    assert_eq!(after, "jigglypuff is sleeping (no process)");

    // The controller agrees with what the tools reported.
    assert_eq!(controller.status().await, WorkerStatus::Sleeping);
}

#[tokio::test]
async fn rule_aliases_bracket_a_task() {
    let (_dir, controller) = script_controller("sleep 60");
    let reg = build_mcp_registry(controller, None);

    let up = run(&reg, "enable_jiggling_before_tasks", json!({})).await;
    assert!(up.contains("interval=30s"), "aliases use defaults: {up}");

    let down = run(&reg, "disable_jiggling_after_tasks", json!({})).await;
    assert!(down.contains("put to sleep successfully"));
}

#[tokio::test]
async fn same_controller_backs_tools_and_library_callers() {
    let (_dir, controller) = script_controller("sleep 60");
    let reg = build_mcp_registry(controller.clone(), None);

    // Start through the library API...
    controller.start(30, 1).await.unwrap();

    // ...and the tool surface sees the same worker.
    let second = run(&reg, "wake_up_jiggly", json!({})).await;
    assert!(second.contains("already jiggling"));

    controller.stop().await.unwrap();
}
