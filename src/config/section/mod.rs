//! Configuration section definitions.
//!
//! Each module corresponds to a section in the site payload:
//!
//! | Module     | Section        | Purpose                           |
//! |------------|----------------|-----------------------------------|
//! | `locale`   | `[locales.*]`  | Locale metadata and overrides     |
//! | `theme`    | `[theme]`      | Theme defaults and partial themes |

mod locale;
pub mod theme;

pub use locale::LocaleSection;
pub use theme::{
    ActiveMatch, FooterConfig, NavItem, SearchConfig, SidebarGroup, SidebarItem, SidebarMap,
    SocialLink, ThemeOverrides,
};
