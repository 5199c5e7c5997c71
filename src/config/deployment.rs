//! Deployment context and resource naming
//!
//! Deployed resources share a single global namespace per provider, so every
//! resource name carries the account, region, and stage it belongs to. The
//! context is resolved once at startup from `AWS_ACCOUNT`, `AWS_REGION`, and
//! `AWS_STAGE` and then passed explicitly into every naming call; nothing
//! re-reads the environment after bootstrap.
//!
//! # Naming format
//!
//! `{resource_id}-{account}-{region}-{stage}`
//!
//! This format is an external contract: deployed stacks were named with it,
//! so it must not change.

use std::env;

use super::error::{ConfigError, ValidationError};

/// Stage used when `AWS_STAGE` is not set.
pub const DEFAULT_STAGE: &str = "dev";

/// Immutable deployment coordinates: which account, region, and stage a
/// process is operating against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeploymentContext {
    /// Cloud account identifier.
    pub account: String,

    /// Cloud region identifier.
    pub region: String,

    /// Deployment stage label (e.g., "dev", "prod").
    pub stage: String,
}

impl DeploymentContext {
    /// Creates a context from explicitly supplied values.
    ///
    /// Use this when the coordinates are already known (e.g., passed in as
    /// stack properties) rather than read from the process environment.
    pub fn new(
        account: impl Into<String>,
        region: impl Into<String>,
        stage: impl Into<String>,
    ) -> Self {
        Self {
            account: account.into(),
            region: region.into(),
            stage: stage.into(),
        }
    }

    /// Resolves the context from the process environment.
    ///
    /// `AWS_ACCOUNT` and `AWS_REGION` are required: resource names must stay
    /// globally distinct across accounts and regions, so there is no safe
    /// default for either. `AWS_STAGE` falls back to [`DEFAULT_STAGE`].
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingEnvVar` if account or region is unset
    /// or empty.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            account: require_env("AWS_ACCOUNT")?,
            region: require_env("AWS_REGION")?,
            stage: stage_from_env(),
        })
    }

    /// Returns the globally-scoped name for a logical resource id.
    ///
    /// Pure and deterministic: the same id and context always produce the
    /// same name, and distinct inputs never collide within one deployment.
    pub fn resource_name(&self, resource_id: &str) -> String {
        format!(
            "{}-{}-{}-{}",
            resource_id, self.account, self.region, self.stage
        )
    }

    /// Validate deployment context values
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.account.is_empty() {
            return Err(ValidationError::EmptyAccount);
        }
        if self.region.is_empty() {
            return Err(ValidationError::EmptyRegion);
        }
        if self.stage.is_empty() {
            return Err(ValidationError::EmptyStage);
        }
        Ok(())
    }
}

/// Returns the globally-scoped name for a resource id under an explicit
/// context. Free-function form of [`DeploymentContext::resource_name`].
pub fn resource_name(resource_id: &str, context: &DeploymentContext) -> String {
    context.resource_name(resource_id)
}

/// Returns the stack name for a base name, sourcing the context from the
/// process environment.
///
/// # Errors
///
/// Fails if `AWS_ACCOUNT` or `AWS_REGION` cannot be resolved.
pub fn stack_name(base_name: &str) -> Result<String, ConfigError> {
    Ok(DeploymentContext::from_env()?.resource_name(base_name))
}

/// Returns the stage from `AWS_STAGE`, or [`DEFAULT_STAGE`] when unset.
/// Never fails.
pub fn stage_from_env() -> String {
    env::var("AWS_STAGE")
        .ok()
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| DEFAULT_STAGE.to_string())
}

fn require_env(name: &'static str) -> Result<String, ConfigError> {
    env::var(name)
        .ok()
        .filter(|s| !s.is_empty())
        .ok_or(ConfigError::MissingEnvVar(name))
}
