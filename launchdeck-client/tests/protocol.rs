use launchdeck_client::protocol::{BackendRequest, BackendResponse};
use launchdeck_core::model::{AppSettings, WorkspaceInput};
use uuid::Uuid;

#[test]
fn request_tags_match_backend_operation_names() {
    let id = Uuid::nil();
    let cases: Vec<(BackendRequest, &str)> = vec![
        (BackendRequest::ListWorkspaces, "list_workspaces"),
        (BackendRequest::GetActiveWorkspace, "get_active_workspace"),
        (
            BackendRequest::SetActiveWorkspace { workspace_id: id },
            "set_active_workspace",
        ),
        (
            BackendRequest::DeleteWorkspace { workspace_id: id },
            "delete_workspace",
        ),
        (
            BackendRequest::ListProjects { workspace_id: None },
            "list_projects",
        ),
        (
            BackendRequest::LaunchProject {
                workspace_id: None,
                project_id: id,
            },
            "launch_project",
        ),
        (BackendRequest::StopProject { project_id: id }, "stop_project"),
        (BackendRequest::GetRunningProjects, "get_running_projects"),
        (
            BackendRequest::GetActivityStats { workspace_id: None },
            "get_activity_stats",
        ),
        (BackendRequest::GetSettings, "get_settings"),
    ];
    for (request, expected) in cases {
        let value = serde_json::to_value(&request).expect("serialize");
        assert_eq!(value["type"], expected);
    }
}

#[test]
fn request_fields_are_camel_case() {
    let id = Uuid::nil();
    let value = serde_json::to_value(BackendRequest::RenameWorkspace {
        workspace_id: id,
        new_name: "Renamed".to_string(),
    })
    .expect("serialize");
    assert_eq!(value["type"], "rename_workspace");
    assert!(value.get("workspaceId").is_some());
    assert!(value.get("newName").is_some());
    assert!(value.get("workspace_id").is_none());

    let value = serde_json::to_value(BackendRequest::DeleteProject {
        workspace_id: None,
        project_id: id,
    })
    .expect("serialize");
    assert!(value.get("projectId").is_some());
}

#[test]
fn create_workspace_nests_payload() {
    let value = serde_json::to_value(BackendRequest::CreateWorkspace {
        payload: WorkspaceInput {
            name: "Personal".to_string(),
            description: Some(String::new()),
            database_path: None,
        },
    })
    .expect("serialize");
    assert_eq!(value["payload"]["name"], "Personal");
}

#[test]
fn response_round_trips() {
    let response = BackendResponse::Settings {
        settings: AppSettings::default(),
    };
    let text = serde_json::to_string(&response).expect("serialize");
    let parsed: BackendResponse = serde_json::from_str(&text).expect("deserialize");
    match parsed {
        BackendResponse::Settings { settings } => {
            assert_eq!(settings.accent_color, "#3b82f6");
        }
        other => panic!("unexpected response: {other:?}"),
    }
}

#[test]
fn error_response_carries_message() {
    let parsed: BackendResponse =
        serde_json::from_str(r#"{"type":"error","message":"boom"}"#).expect("deserialize");
    match parsed {
        BackendResponse::Error { message } => assert_eq!(message, "boom"),
        other => panic!("unexpected response: {other:?}"),
    }
}

#[test]
fn running_projects_response_is_a_list_of_ids() {
    let id = Uuid::new_v4();
    let text = format!(r#"{{"type":"running_projects","projectIds":["{id}"]}}"#);
    let parsed: BackendResponse = serde_json::from_str(&text).expect("deserialize");
    match parsed {
        BackendResponse::RunningProjects { project_ids } => {
            assert_eq!(project_ids, vec![id]);
        }
        other => panic!("unexpected response: {other:?}"),
    }
}
