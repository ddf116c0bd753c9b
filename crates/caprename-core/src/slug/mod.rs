//! Caption-to-filename derivation.
//!
//! Turns a model caption into a unique, filesystem-safe archive entry name:
//! normalize the caption into a base slug, resolve collisions against the
//! batch's name registry, then append the chosen extension.

mod normalize;
mod uniquify;

pub use normalize::{SlugPolicy, DEFAULT_SLUG, DEFAULT_STOPWORDS};
pub use uniquify::NameRegistry;

/// Derives the final archive entry name for one image.
///
/// `registry` must be the one owned by the current batch; the stem reserved
/// here is unique within it, so two entries never collide regardless of
/// `ext`. `ext` is the extension without the dot (e.g. `"png"`).
pub fn final_filename(
    policy: &SlugPolicy,
    registry: &mut NameRegistry,
    caption: &str,
    ext: &str,
) -> String {
    let stem = registry.reserve(&policy.normalize(caption));
    format!("{stem}.{ext}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_captions_get_suffixed_names() {
        let policy = SlugPolicy::default();
        let mut registry = NameRegistry::new();
        let captions = [
            "a red dragon on a shirt",
            "a red dragon on a shirt",
            "blue wave",
        ];
        let names: Vec<String> = captions
            .iter()
            .map(|c| final_filename(&policy, &mut registry, c, "png"))
            .collect();
        assert_eq!(
            names,
            [
                "red_dragon_shirt.png",
                "red_dragon_shirt_1.png",
                "blue_wave.png"
            ]
        );
    }

    #[test]
    fn empty_caption_falls_back_to_default_stem() {
        let policy = SlugPolicy::default();
        let mut registry = NameRegistry::new();
        assert_eq!(
            final_filename(&policy, &mut registry, "", "jpg"),
            "graphic.jpg"
        );
        assert_eq!(
            final_filename(&policy, &mut registry, "The Of And", "jpg"),
            "graphic_1.jpg"
        );
    }

    #[test]
    fn stems_stay_unique_across_extensions() {
        let policy = SlugPolicy::default();
        let mut registry = NameRegistry::new();
        let a = final_filename(&policy, &mut registry, "blue wave", "png");
        let b = final_filename(&policy, &mut registry, "blue wave", "jpg");
        assert_eq!(a, "blue_wave.png");
        assert_eq!(b, "blue_wave_1.jpg");
    }
}
