use serde_json::json;

use super::*;

fn shell_body() -> String {
    json!({
        "Id": "2463b8f8-bd5b-4bbf-8c0a-23b4d8e79b7c",
        "Name": "cloudshell-firewall",
        "Version": "2.0.1",
        "StandardType": "Firewall",
        "ModificationDate": "2024-03-02T11:15:00",
        "LastModifiedByUser": {"Username": "admin", "Email": "admin@example.com"},
        "Author": "Quali",
        "IsOfficial": true,
        "BasedOn": "",
        "ExecutionEnvironmentType": {"Position": 0, "Path": "Python_3"}
    })
    .to_string()
}

#[test]
fn test_login_strips_quotes_from_token() {
    assert_eq!(login(200, "\"token-value\"").unwrap(), "token-value");
}

#[test]
fn test_login_strips_single_quotes_from_token() {
    assert_eq!(login(200, "'token-value'").unwrap(), "token-value");
}

#[test]
fn test_login_leaves_bare_token_untouched() {
    assert_eq!(login(200, "token-value").unwrap(), "token-value");
}

#[test]
fn test_login_unauthorized_is_authentication_failure() {
    let err = login(401, "Invalid user name or password").unwrap_err();

    assert!(matches!(err, LabpackError::AuthenticationFailed { .. }));
    assert_eq!(
        err.to_string(),
        "Authentication failed: Invalid user name or password"
    );
}

#[test]
fn test_login_other_failure_preserves_server_text() {
    let err = login(500, "internal error").unwrap_err();

    assert!(matches!(err, LabpackError::Api { .. }));
    assert_eq!(err.to_string(), "internal error");
}

#[test]
fn test_add_shell_created() {
    assert!(add_shell(201, "").is_ok());
}

#[test]
fn test_add_shell_requires_created_status() {
    // 200 is not good enough, the endpoint answers 201 on success
    let err = add_shell(200, "shell already exists").unwrap_err();
    assert_eq!(
        err.to_string(),
        "Can't add shell, response: shell already exists"
    );
}

#[test]
fn test_update_shell_ok() {
    assert!(update_shell("fw", 200, "").is_ok());
}

#[test]
fn test_update_shell_missing_shell() {
    let err = update_shell("fw", 404, "").unwrap_err();

    assert!(matches!(err, LabpackError::ShellNotFound { .. }));
    assert_eq!(err.to_string(), "Shell 'fw' not found");
}

#[test]
fn test_update_shell_other_failure_names_operation() {
    let err = update_shell("fw", 500, "boom").unwrap_err();
    assert_eq!(err.to_string(), "Can't update shell, response: boom");
}

#[test]
fn test_get_shell_decodes_model() {
    let shell = get_shell("cloudshell-firewall", 200, &shell_body()).unwrap();

    assert_eq!(shell.name, "cloudshell-firewall");
    assert_eq!(shell.version, "2.0.1");
    assert_eq!(shell.last_modified_by_user.username, "admin");
}

#[test]
fn test_get_shell_invalid_json_is_decode_error() {
    let err = get_shell("fw", 200, "<html>proxy error</html>").unwrap_err();

    assert!(matches!(err, LabpackError::Decode { .. }));
    assert_eq!(err.to_string(), "Failed to decode shell description for 'fw'");
}

#[test]
fn test_get_shell_not_supported() {
    let err = get_shell("fw", 404, "").unwrap_err();
    assert_eq!(err.to_string(), "The server does not support shell retrieval");
}

#[test]
fn test_get_shell_other_failure_preserves_server_text() {
    let err = get_shell("fw", 500, "backend exploded").unwrap_err();

    assert!(matches!(err, LabpackError::Api { .. }));
    assert_eq!(err.to_string(), "backend exploded");
}

#[test]
fn test_get_shell_bad_request_means_missing_shell() {
    let err = get_shell("fw", 400, "").unwrap_err();
    assert!(matches!(err, LabpackError::ShellNotFound { name } if name == "fw"));
}

#[test]
fn test_delete_shell_ok() {
    assert!(delete_shell("fw", 200, "").is_ok());
}

#[test]
fn test_delete_shell_not_supported() {
    let err = delete_shell("fw", 404, "").unwrap_err();
    assert_eq!(err.to_string(), "The server does not support shell deletion");
}

#[test]
fn test_delete_shell_bad_request_means_missing_shell() {
    let err = delete_shell("fw", 400, "").unwrap_err();
    assert!(matches!(err, LabpackError::ShellNotFound { name } if name == "fw"));
}

#[test]
fn test_delete_shell_other_failure_preserves_server_text() {
    let err = delete_shell("fw", 500, "oops").unwrap_err();
    assert_eq!(err.to_string(), "oops");
}

#[test]
fn test_list_standards_decodes_models() {
    let body = json!([
        {"StandardName": "cloudshell_networking_standard", "Versions": ["2.0.0", "2.0.1"]},
        {"StandardName": "cloudshell_firewall_standard", "Versions": ["1.0.0"]}
    ])
    .to_string();

    let standards = list_standards(200, &body).unwrap();

    assert_eq!(standards.len(), 2);
    assert_eq!(standards[0].standard_name, "cloudshell_networking_standard");
    assert_eq!(standards[0].versions, vec!["2.0.0", "2.0.1"]);
}

#[test]
fn test_list_standards_not_supported() {
    let err = list_standards(404, "").unwrap_err();
    assert_eq!(
        err.to_string(),
        "The server does not support standards listing"
    );
}

#[test]
fn test_list_standards_other_failure_preserves_server_text() {
    let err = list_standards(503, "maintenance window").unwrap_err();

    assert!(matches!(err, LabpackError::Api { .. }));
    assert_eq!(err.to_string(), "maintenance window");
}

#[test]
fn test_list_standards_invalid_json_is_decode_error() {
    let err = list_standards(200, "{}").unwrap_err();
    assert!(matches!(err, LabpackError::Decode { .. }));
}

#[test]
fn test_export_package_passes_binary_through() {
    // Zip magic followed by bytes that are not valid UTF-8
    let archive = vec![0x50, 0x4b, 0x03, 0x04, 0xff, 0xfe, 0x00, 0x9c];

    let exported = export_package(200, archive.clone()).unwrap();

    assert_eq!(exported, archive);
}

#[test]
fn test_export_package_not_supported() {
    let err = export_package(404, Vec::new()).unwrap_err();
    assert_eq!(err.to_string(), "The server does not support package export");
}

#[test]
fn test_export_package_failure_reports_server_text() {
    let err = export_package(500, b"no such topology".to_vec()).unwrap_err();

    assert!(matches!(err, LabpackError::Api { .. }));
    assert_eq!(err.to_string(), "no such topology");
}

#[test]
fn test_import_package_ok() {
    assert!(import_package(200, "").is_ok());
}

#[test]
fn test_import_package_not_supported() {
    let err = import_package(404, "").unwrap_err();
    assert_eq!(err.to_string(), "The server does not support package import");
}

#[test]
fn test_import_package_failure_preserves_server_text() {
    let err = import_package(500, "corrupt archive").unwrap_err();
    assert_eq!(err.to_string(), "corrupt archive");
}
