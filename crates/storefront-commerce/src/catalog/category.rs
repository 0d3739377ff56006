//! Category types for product organization.

use crate::ids::CategoryId;
use serde::{Deserialize, Serialize};

/// Id of the catch-all category that disables category filtering.
pub const ALL_CATEGORIES: &str = "all";

/// A browsable category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Category {
    /// Unique category identifier.
    pub id: CategoryId,
    /// Category name.
    pub name: String,
    /// Icon shown next to the name.
    pub icon: CategoryIcon,
    /// Number of products shown in the sidebar.
    ///
    /// Display-only: this is carried from the source data as-is and is not
    /// derived from the catalog, so it can disagree with the real membership.
    pub count: u32,
}

impl Category {
    /// Create a new category.
    pub fn new(
        id: impl Into<CategoryId>,
        name: impl Into<String>,
        icon: CategoryIcon,
        count: u32,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            icon,
            count,
        }
    }

    /// Check if this is the catch-all entry.
    pub fn is_all(&self) -> bool {
        self.id.as_str() == ALL_CATEGORIES
    }
}

/// Category icons, mapped statically to a terminal glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CategoryIcon {
    #[default]
    LayoutGrid,
    Laptop,
    Watch,
    Camera,
    Armchair,
    #[serde(rename = "Gamepad2")]
    Gamepad,
    Music,
    Home,
    ShoppingBag,
    Coffee,
}

impl CategoryIcon {
    pub fn as_str(&self) -> &'static str {
        match self {
            CategoryIcon::LayoutGrid => "LayoutGrid",
            CategoryIcon::Laptop => "Laptop",
            CategoryIcon::Watch => "Watch",
            CategoryIcon::Camera => "Camera",
            CategoryIcon::Armchair => "Armchair",
            CategoryIcon::Gamepad => "Gamepad2",
            CategoryIcon::Music => "Music",
            CategoryIcon::Home => "Home",
            CategoryIcon::ShoppingBag => "ShoppingBag",
            CategoryIcon::Coffee => "Coffee",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "LayoutGrid" => Some(CategoryIcon::LayoutGrid),
            "Laptop" => Some(CategoryIcon::Laptop),
            "Watch" => Some(CategoryIcon::Watch),
            "Camera" => Some(CategoryIcon::Camera),
            "Armchair" => Some(CategoryIcon::Armchair),
            "Gamepad2" | "Gamepad" => Some(CategoryIcon::Gamepad),
            "Music" => Some(CategoryIcon::Music),
            "Home" => Some(CategoryIcon::Home),
            "ShoppingBag" => Some(CategoryIcon::ShoppingBag),
            "Coffee" => Some(CategoryIcon::Coffee),
            _ => None,
        }
    }

    /// Single-character glyph for text front ends.
    pub fn glyph(&self) -> &'static str {
        match self {
            CategoryIcon::LayoutGrid => "\u{25a6}",
            CategoryIcon::Laptop => "\u{1f4bb}",
            CategoryIcon::Watch => "\u{231a}",
            CategoryIcon::Camera => "\u{1f4f7}",
            CategoryIcon::Armchair => "\u{1fa91}",
            CategoryIcon::Gamepad => "\u{1f3ae}",
            CategoryIcon::Music => "\u{1f3b5}",
            CategoryIcon::Home => "\u{1f3e0}",
            CategoryIcon::ShoppingBag => "\u{1f45c}",
            CategoryIcon::Coffee => "\u{2615}",
        }
    }
}
