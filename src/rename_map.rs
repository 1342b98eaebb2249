use std::collections::{BTreeMap, BTreeSet};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use thiserror::Error;

const ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
const MAX_ATTEMPTS: usize = 1000;

pub type RenameMap = BTreeMap<String, String>;

#[derive(Debug, Error)]
pub enum RenameError {
    #[error("could not generate a unique replacement for `{name}` after {attempts} attempts")]
    Collision { name: String, attempts: usize },
}

/// Explicit source of replacement identifiers. Seeding makes a whole run
/// reproducible; without a seed the generator draws from OS entropy.
pub struct NameGenerator {
    rng: StdRng,
    length: usize,
}

impl NameGenerator {
    pub fn new(seed: Option<u64>, length: usize) -> Self {
        let rng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_entropy(),
        };
        Self { rng, length }
    }

    /// A candidate like `_xY3q`. The leading underscore keeps generated names
    /// out of the keyword space and visually separates them from user code.
    fn candidate(&mut self) -> String {
        let mut name = String::with_capacity(self.length + 1);
        name.push('_');
        for _ in 0..self.length {
            let idx = self.rng.gen_range(0..ALPHABET.len());
            name.push(ALPHABET[idx] as char);
        }
        name
    }
}

/// Builds the project-wide old-name -> new-name map. Replacement values are
/// guaranteed pairwise distinct and distinct from every name already present
/// in the project; a candidate that collides is redrawn, and exhausting the
/// retry budget is a fatal error rather than a silent duplicate.
pub fn build_rename_map(
    names: &BTreeSet<String>,
    exclude: &BTreeSet<String>,
    generator: &mut NameGenerator,
) -> Result<RenameMap, RenameError> {
    let mut map = RenameMap::new();
    let mut issued: BTreeSet<String> = BTreeSet::new();
    for name in names {
        if exclude.contains(name) {
            continue;
        }
        let mut attempts = 0;
        let replacement = loop {
            if attempts >= MAX_ATTEMPTS {
                return Err(RenameError::Collision {
                    name: name.clone(),
                    attempts: MAX_ATTEMPTS,
                });
            }
            attempts += 1;
            let candidate = generator.candidate();
            if !issued.contains(&candidate) && !names.contains(&candidate) {
                break candidate;
            }
        };
        issued.insert(replacement.clone());
        map.insert(name.clone(), replacement);
    }
    Ok(map)
}
