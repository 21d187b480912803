use crate::{
    analyzer::{
        AnalysisResult,
        analyze,
        formatter::{OutputFormat, format_result_to_string},
    },
    config::AnalyzerConfig,
};
use std::io::Read;
use std::path::{Path, PathBuf};

/// What `pss-ctl analyze` produced: the result and its rendering.
#[derive(Debug, Clone)]
pub struct AnalyzeOutcome {
    pub result: AnalysisResult,
    pub rendered: String,
}

/// Read input from `path`, or from stdin when the path is absent or "-".
pub fn read_input(path: Option<&Path>) -> crate::Result<String> {
    match path {
        Some(p) if p != Path::new("-") => {
            log::debug!("reading manifest from {}", p.display());
            Ok(std::fs::read_to_string(p)?)
        }
        _ => {
            log::debug!("reading manifest from stdin");
            let mut content = String::new();
            std::io::stdin().read_to_string(&mut content)?;
            Ok(content)
        }
    }
}

/// Analyze a manifest. Flags win over the config file, which wins over defaults.
pub fn handle_analyze(
    path: Option<PathBuf>,
    profile: Option<String>,
    format: Option<OutputFormat>,
    config: &AnalyzerConfig,
) -> crate::Result<AnalyzeOutcome> {
    let profile = profile.unwrap_or_else(|| config.profile.to_string());
    let format = format.unwrap_or(config.format);

    let manifest = read_input(path.as_deref())?;
    let result = analyze(&manifest, &profile)?;

    log::info!(
        "{} issue(s) found for profile {}",
        result.issue_count,
        result.profile
    );

    let rendered = format_result_to_string(&result, format);
    Ok(AnalyzeOutcome { result, rendered })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::types::Profile;
    use crate::error::PssError;

    fn manifest_file(content: &str) -> tempfile::NamedTempFile {
        let file = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(file.path(), content).unwrap();
        file
    }

    #[test]
    fn test_config_profile_used_when_flag_absent() {
        let file = manifest_file("kind: Pod\nspec:\n  containers:\n  - name: app\n");
        let config = AnalyzerConfig::new().with_profile(Profile::Baseline);

        let outcome =
            handle_analyze(Some(file.path().to_path_buf()), None, None, &config).unwrap();
        assert_eq!(outcome.result.profile, Profile::Baseline);
        assert_eq!(outcome.result.issue_count, 1);
        assert!(outcome.rendered.contains("PSS-ALLOW_PRIV_ESC"));
    }

    #[test]
    fn test_flags_override_config() {
        let file = manifest_file("kind: Pod\nspec:\n  containers:\n  - name: app\n");
        let config = AnalyzerConfig::new().with_profile(Profile::Baseline);

        let outcome = handle_analyze(
            Some(file.path().to_path_buf()),
            Some("restricted".to_string()),
            Some(OutputFormat::Json),
            &config,
        )
        .unwrap();
        assert_eq!(outcome.result.issue_count, 2);
        assert!(outcome.rendered.contains("\"issueCount\": 2"));
    }

    #[test]
    fn test_invalid_profile_flag() {
        let file = manifest_file("kind: Pod\n");
        let err = handle_analyze(
            Some(file.path().to_path_buf()),
            Some("strict".to_string()),
            None,
            &AnalyzerConfig::default(),
        )
        .unwrap_err();
        assert!(matches!(err, PssError::InvalidProfile(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = handle_analyze(
            Some(PathBuf::from("/nonexistent/manifest.yaml")),
            None,
            None,
            &AnalyzerConfig::default(),
        )
        .unwrap_err();
        assert!(matches!(err, PssError::Io(_)));
    }
}
