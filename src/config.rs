//! Pet configuration parameters
//!
//! All tunable parameters for the simulation: timer ranges, the ignore
//! threshold, the sick cooldown, the accepted answers and the console
//! language.

use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Language of the console text. Request prompts and replies are English
/// in every language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    English,
    Ukrainian,
}

/// Core simulation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PetConfig {
    // --- Identity ---
    /// Name used when the player enters nothing at the name prompt
    pub default_name: String,
    /// Console text language
    pub language: Language,

    // --- Request timer ---
    /// Lower bound (inclusive) of the request interval, in milliseconds
    pub request_interval_min_ms: u32,
    /// Upper bound (exclusive) of the request interval, in milliseconds
    pub request_interval_max_ms: u32,

    // --- Life timer ---
    /// Lower bound (inclusive) of the lifespan, in milliseconds
    pub lifespan_min_ms: u32,
    /// Upper bound (exclusive) of the lifespan, in milliseconds
    pub lifespan_max_ms: u32,

    // --- Care rules ---
    /// Consecutive ignored requests that make a healthy pet sick
    pub max_ignored: u8,
    /// Pause between falling sick and the first Heal request (milliseconds)
    pub sick_cooldown_ms: u32,
    /// Answers that count as "request satisfied" (compared case-insensitively)
    pub affirmative_answers: Vec<String>,

    // --- Timing ---
    /// Main loop period (milliseconds)
    pub control_loop_interval_ms: u32,
    /// Fixed RNG seed; `None` seeds from OS entropy
    pub seed: Option<u64>,
}

impl Default for PetConfig {
    fn default() -> Self {
        Self {
            default_name: "Тамагочі".to_string(),
            language: Language::English,

            request_interval_min_ms: 10_000,
            request_interval_max_ms: 11_000,

            lifespan_min_ms: 60_000,
            lifespan_max_ms: 120_000,

            max_ignored: 3,
            sick_cooldown_ms: 2_000,
            affirmative_answers: vec!["y".to_string(), "так".to_string()],

            control_loop_interval_ms: 100, // 10 Hz
            seed: None,
        }
    }
}

impl PetConfig {
    /// Reject inconsistent values.
    pub fn validate(&self) -> Result<()> {
        if self.default_name.trim().is_empty() {
            return Err(Error::Config("default_name must not be blank"));
        }
        if self.request_interval_min_ms == 0
            || self.request_interval_min_ms >= self.request_interval_max_ms
        {
            return Err(Error::Config(
                "request interval must satisfy 0 < min < max",
            ));
        }
        if self.lifespan_min_ms == 0 || self.lifespan_min_ms >= self.lifespan_max_ms {
            return Err(Error::Config("lifespan must satisfy 0 < min < max"));
        }
        if self.max_ignored == 0 {
            return Err(Error::Config("max_ignored must be at least 1"));
        }
        if self.affirmative_answers.iter().all(|a| a.trim().is_empty()) {
            return Err(Error::Config("at least one affirmative answer is required"));
        }
        if self.control_loop_interval_ms == 0
            || self.control_loop_interval_ms >= self.request_interval_min_ms
        {
            return Err(Error::Config(
                "control loop must run faster than the request timer",
            ));
        }
        Ok(())
    }

    /// Whether a raw console answer counts as "yes".
    pub fn is_affirmative(&self, answer: &str) -> bool {
        let answer = answer.trim().to_lowercase();
        !answer.is_empty()
            && self
                .affirmative_answers
                .iter()
                .any(|a| a.trim().to_lowercase() == answer)
    }

    /// Random source for request selection and timer intervals.
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}
