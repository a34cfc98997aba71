//! Selector-based entity location.
//!
//! A selector is the tail of a player's command line: each segment names a
//! child to descend into, so `look crate note` finds the `note` inside the
//! `crate` inside the current room.

use gridfall_foundation::Output;

use crate::entity::EntityId;
use crate::world::World;

impl World {
    /// Resolves a selector path starting at `root`.
    ///
    /// For each segment in order, the current node must be a container;
    /// matching is case-insensitive, exact name first, then unique prefix.
    /// Zero prefix matches and multiple prefix matches are treated
    /// identically: the item cannot be located. All failure notices are
    /// written here; in developer mode a prefix hit announces which item
    /// was assumed.
    pub fn locate_entity<S: AsRef<str>>(
        &self,
        root: EntityId,
        selector: &[S],
        out: &mut dyn Output,
        dev_mode: bool,
    ) -> Option<EntityId> {
        let mut current = root;

        for segment in selector {
            let Some(container) = self.entity(current).container() else {
                out.write(&format!(
                    "The item '{}' is not a container.\n",
                    self.entity(current).name()
                ));
                return None;
            };

            let wanted = segment.as_ref().to_lowercase();
            let exact = container
                .items()
                .iter()
                .copied()
                .find(|&child| self.entity(child).name().to_lowercase() == wanted);

            let found = match exact {
                Some(child) => child,
                None => {
                    let mut hits = container.items().iter().copied().filter(|&child| {
                        self.entity(child).name().to_lowercase().starts_with(&wanted)
                    });
                    match (hits.next(), hits.next()) {
                        (Some(only), None) => {
                            if dev_mode {
                                out.write(&format!(
                                    "Assuming item '{}'.\n\n",
                                    self.entity(only).name()
                                ));
                            }
                            only
                        }
                        // Ambiguous prefixes resolve the same way as no
                        // match at all.
                        _ => {
                            out.write(&format!("Unable to locate the item '{wanted}'.\n"));
                            return None;
                        }
                    }
                }
            };

            current = found;
        }

        Some(current)
    }
}
