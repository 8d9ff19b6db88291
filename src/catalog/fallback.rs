use crate::ripeness::RipenessCategory;

/// Fruit names recognised in filenames even when the catalog has no entry for them.
pub const FALLBACK_FRUITS: &[&str] = &[
    "apple",
    "banana",
    "orange",
    "mango",
    "strawberry",
    "tomato",
    "grape",
    "pear",
    "peach",
    "avocado",
    "lemon",
    "pineapple",
];

pub fn recommendation(category: RipenessCategory) -> &'static str {
    match category {
        RipenessCategory::Unripe => "Hold in storage until ripe",
        RipenessCategory::Ripe => "Display for immediate sale",
        RipenessCategory::Overripe => "Discount for quick sale",
        RipenessCategory::Spoiled => "Remove from inventory",
    }
}

pub fn indicators(category: RipenessCategory) -> &'static str {
    match category {
        RipenessCategory::Unripe => "Firm texture and pale or green coloring",
        RipenessCategory::Ripe => "Even coloring and slight give when pressed",
        RipenessCategory::Overripe => "Soft spots and darkening skin",
        RipenessCategory::Spoiled => "Mold, leaking juice or a sour smell",
    }
}
