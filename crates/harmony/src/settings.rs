//! Run-time configuration.

use crate::error::UnknownNameError;
use crate::order::{Algorithm, Direction};
use crate::util::{Env, Environment};
use crate::OutputFormat;

/// The environment variable selecting the default algorithm.
pub const ALGORITHM_VAR: &str = "HARMONY_ALGORITHM";
/// The environment variable selecting the default direction.
pub const DIRECTION_VAR: &str = "HARMONY_DIRECTION";
/// The environment variable selecting the default output format.
pub const FORMAT_VAR: &str = "HARMONY_FORMAT";
/// The environment variable selecting the default file name suffix.
pub const SUFFIX_VAR: &str = "HARMONY_SUFFIX";

/// The settings for sorting a palette.
///
/// Settings start out with their defaults, i.e., the `hillbert` algorithm,
/// `forward` direction, `input` format, and an empty suffix. Environment
/// variables may override the defaults, and command line options may
/// override the environment variables in turn. Empty environment variables
/// count as unset.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Settings {
    pub algorithm: Algorithm,
    pub direction: Direction,
    pub format: OutputFormat,
    pub suffix: String,
}

impl Settings {
    /// Resolve the settings from the process environment.
    ///
    /// This function returns an error if an environment variable does not
    /// name a valid algorithm, direction, or output format.
    pub fn from_environment() -> Result<Self, UnknownNameError> {
        Self::from_env(&Env::default())
    }

    pub(crate) fn from_env<E: Environment>(env: &E) -> Result<Self, UnknownNameError> {
        let mut settings = Self::default();

        if let Some(value) = env.read_non_empty(ALGORITHM_VAR) {
            settings.algorithm = value.parse()?;
        }
        if let Some(value) = env.read_non_empty(DIRECTION_VAR) {
            settings.direction = value.parse()?;
        }
        if let Some(value) = env.read_non_empty(FORMAT_VAR) {
            settings.format = value.parse()?;
        }
        if let Some(value) = env.read_non_empty(SUFFIX_VAR) {
            settings.suffix = value;
        }

        tracing::debug!(
            algorithm = settings.algorithm.name(),
            direction = settings.direction.name(),
            format = settings.format.name(),
            suffix = settings.suffix.as_str(),
            "resolved settings"
        );
        Ok(settings)
    }
}

// ====================================================================================================================

#[cfg(test)]
mod test {
    use super::{Settings, ALGORITHM_VAR, DIRECTION_VAR, FORMAT_VAR, SUFFIX_VAR};
    use crate::error::UnknownNameError;
    use crate::order::{Algorithm, Direction};
    use crate::util::FakeEnv;
    use crate::OutputFormat;

    #[test]
    fn test_defaults() -> Result<(), UnknownNameError> {
        let settings = Settings::from_env(&FakeEnv::new())?;
        assert_eq!(settings.algorithm, Algorithm::Hillbert);
        assert_eq!(settings.direction, Direction::Forward);
        assert_eq!(settings.format, OutputFormat::Input);
        assert_eq!(settings.suffix, "");
        Ok(())
    }

    #[test]
    fn test_environment() -> Result<(), UnknownNameError> {
        let mut env = FakeEnv::new();
        env.set(ALGORITHM_VAR, "step-alternated")
            .set(DIRECTION_VAR, "backward")
            .set(FORMAT_VAR, "")
            .set(SUFFIX_VAR, "_v2");

        let settings = Settings::from_env(&env)?;
        assert_eq!(
            settings,
            Settings {
                algorithm: Algorithm::StepAlternated,
                direction: Direction::Backward,
                format: OutputFormat::Input,
                suffix: "_v2".to_owned(),
            }
        );
        Ok(())
    }

    #[test]
    fn test_invalid_environment() {
        let mut env = FakeEnv::new();
        env.set(FORMAT_VAR, "cmyk");

        let error = Settings::from_env(&env).unwrap_err();
        assert_eq!(error.kind(), "format");
        assert_eq!(error.value(), "cmyk");
    }
}
