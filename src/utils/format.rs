/// Upper-case the first letter of a category label (`"nature"` -> `"Nature"`)
pub fn category_label(category: &str) -> String {
    let mut chars = category.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Max grid width in pixels so short categories don't stretch across the pane
pub fn category_grid_max_width(entry_count: usize) -> usize {
    entry_count * 120
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_label() {
        assert_eq!(category_label("nature"), "Nature");
        assert_eq!(category_label("Food"), "Food");
        assert_eq!(category_label("émotions"), "Émotions");
        assert_eq!(category_label("x"), "X");
        assert_eq!(category_label(""), "");
    }

    #[test]
    fn test_category_grid_max_width() {
        assert_eq!(category_grid_max_width(0), 0);
        assert_eq!(category_grid_max_width(3), 360);
    }
}
