//! Translation of form selections into nearby-search filters.

use crate::cuisine::Cuisine;
use crate::types::PriceTier;

/// Optional filters applied to one nearby search.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchCriteria {
    /// Price level in `1..=4`.
    pub price_level: Option<u8>,
    pub cuisine_keyword: Option<String>,
}

/// Builds the search filters from the user's selections.
///
/// A predefined cuisine maps through the fixed keyword table. `Custom` uses
/// `custom_text` verbatim, or applies no keyword when the text is empty.
#[must_use]
pub fn build_criteria(
    price_tier: Option<PriceTier>,
    cuisine: Option<Cuisine>,
    custom_text: Option<&str>,
) -> SearchCriteria {
    let cuisine_keyword = match cuisine {
        Some(Cuisine::Custom) => custom_text
            .filter(|text| !text.is_empty())
            .map(str::to_owned),
        Some(predefined) => predefined.keyword().map(str::to_owned),
        None => None,
    };

    SearchCriteria {
        price_level: price_tier.map(PriceTier::level),
        cuisine_keyword,
    }
}

/// Selections held by the search form between user actions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchForm {
    pub price_tier: Option<PriceTier>,
    pub cuisine: Option<Cuisine>,
    /// Keyword committed by [`SearchForm::add_custom_cuisine`].
    pub custom_keyword: String,
    /// Text currently typed into the custom-cuisine input.
    pub custom_input: String,
}

impl SearchForm {
    /// Commits the typed custom text as the active cuisine and clears the
    /// input field. Does nothing when the input is empty. Never triggers a
    /// search.
    pub fn add_custom_cuisine(&mut self) {
        if self.custom_input.is_empty() {
            return;
        }
        self.custom_keyword = std::mem::take(&mut self.custom_input);
        self.cuisine = Some(Cuisine::Custom);
    }

    /// Selects a predefined cuisine (or `Custom`, or clears the selection).
    pub fn select_cuisine(&mut self, cuisine: Option<Cuisine>) {
        self.cuisine = cuisine;
        if cuisine != Some(Cuisine::Custom) {
            self.custom_keyword.clear();
        }
    }

    /// Text used as the custom keyword: the committed keyword, or whatever is
    /// currently typed when nothing has been committed yet.
    #[must_use]
    pub fn custom_text(&self) -> &str {
        if self.custom_keyword.is_empty() {
            &self.custom_input
        } else {
            &self.custom_keyword
        }
    }

    #[must_use]
    pub fn criteria(&self) -> SearchCriteria {
        build_criteria(self.price_tier, self.cuisine, Some(self.custom_text()))
    }

    /// Text shown after `當前關鍵字：`.
    #[must_use]
    pub fn current_keyword_label(&self) -> String {
        match self.cuisine {
            Some(Cuisine::Custom) => self.custom_text().to_string(),
            Some(predefined) => predefined.label().to_string(),
            None => String::new(),
        }
    }
}

#[cfg(test)]
#[path = "criteria_test.rs"]
mod tests;
