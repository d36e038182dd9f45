use super::*;
use clap::CommandFactory;

#[test]
fn cli_definition_is_consistent() {
    Cli::command().debug_assert();
}

#[test]
fn cli_parses_ask_with_global_mode() {
    let cli = Cli::try_parse_from(["thinkofatitle", "ask", "AI ethics", "--mode", "direct"]).unwrap();
    assert_eq!(cli.mode, Some(ModeArg::Direct));
    match cli.command {
        Command::Ask { query, deep_link, preset, .. } => {
            assert_eq!(query.as_deref(), Some("AI ethics"));
            assert!(deep_link.is_none());
            assert!(preset.is_none());
        }
        other => panic!("expected ask, got {other:?}"),
    }
}

#[test]
fn cli_rejects_query_with_link() {
    let result = Cli::try_parse_from(["thinkofatitle", "ask", "x", "--link", "/?q=y"]);
    assert!(result.is_err());
}

#[test]
fn mode_arg_maps_to_service_mode() {
    assert_eq!(ServiceMode::from(ModeArg::Proxy), ServiceMode::Proxy);
    assert_eq!(ServiceMode::from(ModeArg::Direct), ServiceMode::Direct);
}

// =============================================================================
// resolve_query
// =============================================================================

#[test]
fn resolve_query_prefers_explicit_text() {
    assert_eq!(resolve_query(Some("topic".into()), None, None).unwrap(), "topic");
}

#[test]
fn resolve_query_reads_deep_link() {
    let query = resolve_query(None, Some("http://localhost:3000/?q=Computer+Science"), None).unwrap();
    assert_eq!(query, "Computer Science");
}

#[test]
fn resolve_query_reads_preset() {
    assert_eq!(resolve_query(None, None, Some(4)).unwrap(), "Machine Learning");
    assert!(matches!(resolve_query(None, None, Some(9)), Err(AppError::UnknownPreset(9))));
}

#[test]
fn resolve_query_rejects_blank_or_missing() {
    assert!(matches!(resolve_query(Some("   ".into()), None, None), Err(AppError::MissingQuery)));
    assert!(matches!(resolve_query(None, Some("http://localhost/"), None), Err(AppError::MissingQuery)));
    assert!(matches!(resolve_query(None, None, None), Err(AppError::MissingQuery)));
}
