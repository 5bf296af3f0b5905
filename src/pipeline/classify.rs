use serde::Serialize;
use unicode_general_category::{get_general_category, GeneralCategory};

/// Whitespace category of a single character
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Space,
    Tab,
    Lf,
    Cr,
    Other,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Space,
        Category::Tab,
        Category::Lf,
        Category::Cr,
        Category::Other,
    ];

    pub fn of(c: char) -> Self {
        match c {
            ' ' => Self::Space,
            '\t' => Self::Tab,
            '\n' => Self::Lf,
            '\r' => Self::Cr,
            _ => Self::Other,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Space => "space",
            Self::Tab => "tab",
            Self::Lf => "lf",
            Self::Cr => "cr",
            Self::Other => "other",
        }
    }
}

/// Per-category character counts. The five counts always sum to the number
/// of characters classified.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CategoryCounts {
    pub space: usize,
    pub tab: usize,
    pub lf: usize,
    pub cr: usize,
    pub other: usize,
}

impl CategoryCounts {
    pub fn get(&self, category: Category) -> usize {
        match category {
            Category::Space => self.space,
            Category::Tab => self.tab,
            Category::Lf => self.lf,
            Category::Cr => self.cr,
            Category::Other => self.other,
        }
    }

    fn slot(&mut self, category: Category) -> &mut usize {
        match category {
            Category::Space => &mut self.space,
            Category::Tab => &mut self.tab,
            Category::Lf => &mut self.lf,
            Category::Cr => &mut self.cr,
            Category::Other => &mut self.other,
        }
    }

    pub fn total(&self) -> usize {
        self.space + self.tab + self.lf + self.cr + self.other
    }

    /// Counts in report order: space, tab, lf, cr, other
    pub fn iter(&self) -> impl Iterator<Item = (Category, usize)> + '_ {
        Category::ALL.into_iter().map(move |c| (c, self.get(c)))
    }
}

/// Count every character of `text` into exactly one category
pub fn classify(text: &str) -> CategoryCounts {
    let mut counts = CategoryCounts::default();
    for c in text.chars() {
        *counts.slot(Category::of(c)) += 1;
    }
    counts
}

/// Number of printable characters: the ASCII space plus anything outside the
/// Unicode "Other" (Cc, Cf, Cs, Co, Cn) and "Separator" (Zs, Zl, Zp)
/// categories. Zero-width format characters are not printable.
pub fn count_printable(text: &str) -> usize {
    text.chars().filter(|&c| is_printable(c)).count()
}

fn is_printable(c: char) -> bool {
    c == ' '
        || !matches!(
            get_general_category(c),
            GeneralCategory::Control
                | GeneralCategory::Format
                | GeneralCategory::Surrogate
                | GeneralCategory::PrivateUse
                | GeneralCategory::Unassigned
                | GeneralCategory::SpaceSeparator
                | GeneralCategory::LineSeparator
                | GeneralCategory::ParagraphSeparator
        )
}
