//! Scripted storefront sessions
//!
//! A script is a YAML document with an `intents:` list. Each entry names its
//! `action` plus the fields that action needs:
//!
//! ```yaml
//! intents:
//!   - action: set_tier_size
//!     size: 5
//!   - action: add_item
//!     item_id: chocochip
//!   - action: finalize_bundle
//! ```

use crate::abstractions::SequentialIds;
use crate::catalog::Catalog;
use crate::config::ShopConfig;
use crate::error::{common, ErrorCode, ErrorExt, Result, ShopError};
use crate::session::{Intent, Outcome, SessionView, ShopSession};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Script {
    #[serde(default)]
    pub intents: Vec<Intent>,
}

/// One replayed intent and what the session made of it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepReport {
    pub step: usize,
    pub intent: String,
    pub outcome: String,
    #[serde(skip)]
    pub applied: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScriptReport {
    pub steps: Vec<StepReport>,
    pub view: SessionView,
}

impl ScriptReport {
    pub fn applied_count(&self) -> usize {
        self.steps.iter().filter(|step| step.applied).count()
    }
}

/// Read a script file
pub fn load_script(path: &Path) -> Result<Script> {
    if !path.exists() {
        return Err(common::script_not_found(path));
    }

    let content =
        fs::read_to_string(path).to_script_error(format!("Cannot read script {}", path.display()))?;
    serde_yaml::from_str(&content).map_err(|e| {
        ShopError::script_with_code(
            ErrorCode::SCRIPT_PARSE_ERROR,
            "script is not a valid intent list",
            Some(path.to_path_buf()),
        )
        .with_source(e)
    })
}

/// Replay a script through a fresh session with sequential identifiers
pub fn run_script(script: &Script, config: &ShopConfig, catalog: Catalog) -> ScriptReport {
    let mut session = ShopSession::from_config(config, catalog, SequentialIds::new());

    let steps = script
        .intents
        .iter()
        .cloned()
        .enumerate()
        .map(|(index, intent)| {
            let description = intent.description();
            let outcome: Outcome = session.dispatch(intent);
            debug!("Step {}: {} -> {}", index + 1, description, outcome);
            StepReport {
                step: index + 1,
                intent: description,
                applied: outcome.is_applied(),
                outcome: outcome.to_string(),
            }
        })
        .collect();

    ScriptReport {
        steps,
        view: session.view(),
    }
}
