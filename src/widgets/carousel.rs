//! Quote carousel state.
//!
//! The carousel only knows how to step; the recurring timer that drives it
//! is [`crate::workers::ticker::QuoteTicker`].

use crate::data::Quote;
use crate::error::WidgetError;
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct QuoteCarousel {
    quotes: Arc<[Quote]>,
    index: usize,
}

impl QuoteCarousel {
    /// Create a carousel showing the first quote.
    ///
    /// # Errors
    /// Returns [`WidgetError::EmptyQuotes`] if `quotes` is empty.
    pub fn new(quotes: impl Into<Arc<[Quote]>>) -> Result<Self, WidgetError> {
        let quotes = quotes.into();
        if quotes.is_empty() {
            return Err(WidgetError::EmptyQuotes);
        }
        Ok(Self { quotes, index: 0 })
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.quotes.len()
    }

    pub fn current(&self) -> &Quote {
        &self.quotes[self.index]
    }

    /// Step to the next quote, wrapping at the end. Returns the new index.
    pub fn advance(&mut self) -> usize {
        self.index = (self.index + 1) % self.quotes.len();
        self.index
    }

    /// A copy of this carousel rewound to the first quote.
    pub fn restarted(&self) -> Self {
        Self {
            quotes: Arc::clone(&self.quotes),
            index: 0,
        }
    }
}
