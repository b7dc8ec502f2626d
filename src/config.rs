//! Display units from the environment.
//!
//! ```text
//! UNITCONV_PRESET=engineering
//! UNITCONV_UNIT_PRESSURE=kPa
//! UNITCONV_UNIT_MASS_MOMENT_OF_INERTIA=kg*cm^2
//! ```
//!
//! A `.env` file is honoured; it is searched in the working directory,
//! then `CARGO_MANIFEST_DIR`, then next to the executable.

use std::path::{Path, PathBuf};
use std::sync::Once;

use converter::{Category, UnitConverter};
use tracing::debug;

use crate::error::{Result, UnitconvError};
use crate::preferences::{DisplayUnits, Preset};

pub const PRESET_VAR: &str = "UNITCONV_PRESET";
pub const UNIT_VAR_PREFIX: &str = "UNITCONV_UNIT_";

impl DisplayUnits {
    /// Load `.env` (once) and read the process environment.
    pub fn from_env() -> Result<Self> {
        load_dotenv();
        Self::from_vars(std::env::vars())
    }

    /// Build display units from `(key, value)` pairs. Keys not starting
    /// with `UNITCONV_` are ignored.
    ///
    /// Override units are checked against the process-wide table; use
    /// [`from_vars_in`](Self::from_vars_in) when converting with another
    /// [`UnitConverter`].
    pub fn from_vars<I, K, V>(vars: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        Self::from_vars_in(vars, UnitConverter::global())
    }

    /// Like [`from_vars`](Self::from_vars), checking override units
    /// against `engine`. Preset units are not checked.
    pub fn from_vars_in<I, K, V>(vars: I, engine: &UnitConverter) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut preset = Preset::Si;
        let mut overrides = Vec::new();

        for (key, value) in vars {
            let (key, value) = (key.as_ref(), value.as_ref());
            if key == PRESET_VAR {
                preset = value.parse()?;
            } else if let Some(suffix) = key.strip_prefix(UNIT_VAR_PREFIX) {
                let category = category_from_env_suffix(suffix).ok_or_else(|| {
                    UnitconvError::InvalidVariable {
                        key: key.to_string(),
                        reason: format!("no category named {suffix}"),
                    }
                })?;
                overrides.push((key.to_string(), category, value.trim().to_string()));
            }
        }

        let mut units = DisplayUnits::preset(preset);
        for (key, category, unit) in overrides {
            if !engine.contains(category, &unit) {
                return Err(UnitconvError::InvalidVariable {
                    key,
                    reason: format!("no such unit ({unit}) in category ({category})"),
                });
            }
            debug!(%category, unit = %unit, "display unit overridden from environment");
            units = units.with(category, unit);
        }
        Ok(units)
    }
}

/// `MASS_MOMENT_OF_INERTIA` → `Category::MassMomentOfInertia`.
pub fn category_from_env_suffix(suffix: &str) -> Option<Category> {
    Category::ALL.into_iter().find(|c| env_suffix(*c).eq_ignore_ascii_case(suffix))
}

/// Upper snake case of the category identifier.
pub fn env_suffix(category: Category) -> String {
    let mut out = String::new();
    for (i, ch) in category.ident().chars().enumerate() {
        if ch.is_ascii_uppercase() && i > 0 {
            out.push('_');
        }
        out.push(ch.to_ascii_uppercase());
    }
    out
}

/// Load the first `.env` found in the working directory, the crate
/// directory or next to the executable. Runs once per process.
fn load_dotenv() {
    static DOTENV_INIT: Once = Once::new();
    DOTENV_INIT.call_once(|| {
        if dotenvy::dotenv().is_ok() {
            return;
        }
        let manifest_dir = std::env::var_os("CARGO_MANIFEST_DIR").map(PathBuf::from);
        let exe_dir = std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(Path::to_path_buf));
        let found = [manifest_dir, exe_dir]
            .into_iter()
            .flatten()
            .map(|dir| dir.join(".env"))
            .find(|path| path.exists());
        if let Some(path) = found {
            match dotenvy::from_path(&path) {
                Ok(()) => debug!(path = %path.display(), "loaded .env"),
                Err(err) => debug!(path = %path.display(), %err, "could not load .env"),
            }
        }
    });
}
