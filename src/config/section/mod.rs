//! Configuration section definitions.
//!
//! Each module corresponds to a part of `themeConfig`:
//!
//! | Module    | Keys                                              |
//! |-----------|---------------------------------------------------|
//! | `nav`     | `nav`                                             |
//! | `sidebar` | `sidebar`                                         |
//! | `repo`    | `repo`, `repoLabel`, `docs*`, `editLink*`         |
//! | `theme`   | `themeConfig` itself plus display options         |

pub mod nav;
pub mod repo;
pub mod sidebar;
pub mod theme;

pub use nav::{MAX_NAV_DEPTH, NavItem, NavLink};
pub use repo::RepoConfig;
pub use sidebar::{FALLBACK_KEY, Sidebar, SidebarEntry, SidebarSection};
pub use theme::ThemeConfig;
