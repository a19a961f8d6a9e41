use std::env;

use crate::SHELL_MODE_ENV;

const MODE_RUN: &str = "run";
const MODE_DEVPROD: &str = "devprod";
const MODE_SERVE: &str = "serve";
const MODE_BUILD: &str = "build";

/// Operating mode selected through `VUELECTRO_ENV`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum ShellMode {
    Run,
    DevProd,
    Serve,
    Build,
    /// Any other non-empty value. Keeps the working-directory layout and the
    /// packaged renderer file, but is not a development mode.
    Unrecognized(String),
}

impl ShellMode {
    pub(crate) fn from_env() -> Self {
        Self::from_env_value(env::var(SHELL_MODE_ENV).ok().as_deref())
    }

    pub(crate) fn from_env_value(raw: Option<&str>) -> Self {
        match raw {
            None | Some("") => Self::Build,
            Some(MODE_RUN) => Self::Run,
            Some(MODE_DEVPROD) => Self::DevProd,
            Some(MODE_SERVE) => Self::Serve,
            Some(MODE_BUILD) => Self::Build,
            Some(other) => Self::Unrecognized(other.to_string()),
        }
    }

    pub(crate) fn as_str(&self) -> &str {
        match self {
            Self::Run => MODE_RUN,
            Self::DevProd => MODE_DEVPROD,
            Self::Serve => MODE_SERVE,
            Self::Build => MODE_BUILD,
            Self::Unrecognized(raw) => raw,
        }
    }

    pub(crate) fn is_development(&self) -> bool {
        matches!(self, Self::Run | Self::DevProd | Self::Serve)
    }

    pub(crate) fn uses_install_dirs(&self) -> bool {
        matches!(self, Self::Build)
    }

    pub(crate) fn loads_dev_server(&self) -> bool {
        matches!(self, Self::Serve)
    }
}

#[cfg(test)]
mod tests {
    use super::ShellMode;

    #[test]
    fn from_env_value_defaults_to_build_when_unset_or_empty() {
        assert_eq!(ShellMode::from_env_value(None), ShellMode::Build);
        assert_eq!(ShellMode::from_env_value(Some("")), ShellMode::Build);
    }

    #[test]
    fn from_env_value_maps_known_modes() {
        assert_eq!(ShellMode::from_env_value(Some("run")), ShellMode::Run);
        assert_eq!(ShellMode::from_env_value(Some("devprod")), ShellMode::DevProd);
        assert_eq!(ShellMode::from_env_value(Some("serve")), ShellMode::Serve);
        assert_eq!(ShellMode::from_env_value(Some("build")), ShellMode::Build);
    }

    #[test]
    fn from_env_value_keeps_unknown_values_verbatim() {
        assert_eq!(
            ShellMode::from_env_value(Some("Serve")),
            ShellMode::Unrecognized("Serve".to_string())
        );
        assert_eq!(
            ShellMode::from_env_value(Some(" run")),
            ShellMode::Unrecognized(" run".to_string())
        );
        assert_eq!(
            ShellMode::from_env_value(Some("staging")).as_str(),
            "staging"
        );
    }

    #[test]
    fn development_flag_follows_mode() {
        assert!(ShellMode::Run.is_development());
        assert!(ShellMode::DevProd.is_development());
        assert!(ShellMode::Serve.is_development());
        assert!(!ShellMode::Build.is_development());
        assert!(!ShellMode::Unrecognized("staging".to_string()).is_development());
    }

    #[test]
    fn only_build_uses_install_dirs_and_only_serve_loads_dev_server() {
        let unrecognized = ShellMode::Unrecognized("x".to_string());
        assert!(ShellMode::Build.uses_install_dirs());
        assert!(!unrecognized.uses_install_dirs());
        assert!(!ShellMode::Run.uses_install_dirs());

        assert!(ShellMode::Serve.loads_dev_server());
        assert!(!ShellMode::Run.loads_dev_server());
        assert!(!unrecognized.loads_dev_server());
    }
}
