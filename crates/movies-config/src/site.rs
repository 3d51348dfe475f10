use crate::{
  config::{Config, Logo},
  mode::Mode,
};

const SITE: Config = Config {
  site_title:        "My Favorite Movies Ranked",
  site_description:  "A list of all my favorite movies in order from best to \
                      worst. You can filter for multiple different genres as \
                      well as their original language and if they have been \
                      dubbed in English or not.",
  og_image:          "/og.jpg",
  logo:              Logo {
    src: "/logo.svg",
    alt: "My Favorite Movies Ranked Logo",
  },
  canonical:         true,
  noindex:           false,
  mode:              Mode::Auto,
  scroll_animations: true,
};

// Empty strings are rejected when the crate is built, not when it is read.
const _: () = {
  assert!(!SITE.site_title.is_empty(), "siteTitle must not be empty");
  assert!(
    !SITE.site_description.is_empty(),
    "siteDescription must not be empty"
  );
  assert!(!SITE.og_image.is_empty(), "ogImage must not be empty");
  assert!(!SITE.logo.src.is_empty(), "logo.src must not be empty");
  assert!(!SITE.logo.alt.is_empty(), "logo.alt must not be empty");
};

/// The configuration record of the site.
///
/// Lives for the whole process and is never mutated.
pub static CONFIG_DATA: Config = SITE;

/// Read the configuration record.
///
/// Every call returns the same reference. Reading performs no I/O and cannot
/// fail.
///
/// Fields cannot be reassigned through the returned reference:
///
/// ```compile_fail
/// movies_config::config_data().mode = movies_config::Mode::Dark;
/// ```
#[must_use]
pub fn config_data() -> &'static Config {
  &CONFIG_DATA
}
