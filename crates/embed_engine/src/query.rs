use scraper::{ElementRef, Html, Selector};

/// An ordered list of selector strategies. The first strategy that matches
/// anything in the document wins; later strategies are never consulted.
#[derive(Debug, Clone)]
pub struct SelectorChain {
    strategies: Vec<(String, Selector)>,
}

impl SelectorChain {
    /// Builds a chain from selector strings. Entries that fail to parse are
    /// skipped.
    pub fn parse(strategies: &[&str]) -> Self {
        let strategies = strategies
            .iter()
            .filter_map(|source| {
                Selector::parse(source)
                    .ok()
                    .map(|selector| (source.to_string(), selector))
            })
            .collect();
        Self { strategies }
    }

    /// First element produced by the first matching strategy.
    pub fn first_match<'a>(&self, doc: &'a Html) -> Option<ElementRef<'a>> {
        self.strategies
            .iter()
            .find_map(|(_, selector)| doc.select(selector).next())
    }

    /// Source text of the first strategy that matches anything.
    pub fn first_hit(&self, doc: &Html) -> Option<&str> {
        self.strategies
            .iter()
            .find(|(_, selector)| doc.select(selector).next().is_some())
            .map(|(source, _)| source.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::SelectorChain;
    use scraper::Html;

    #[test]
    fn earlier_strategies_win() {
        let doc = Html::parse_document("<main><h1>Main</h1></main><h1>Bare</h1>");
        let chain = SelectorChain::parse(&["main h1", "h1"]);

        let text: String = chain.first_match(&doc).unwrap().text().collect();
        assert_eq!(text, "Main");
        assert_eq!(chain.first_hit(&doc), Some("main h1"));
    }

    #[test]
    fn falls_through_to_later_strategies() {
        let doc = Html::parse_document("<h1>Bare</h1>");
        let chain = SelectorChain::parse(&["main h1", "h1"]);

        assert_eq!(chain.first_hit(&doc), Some("h1"));
    }

    #[test]
    fn unparseable_entries_are_skipped() {
        let doc = Html::parse_document("<h1>Bare</h1>");
        let chain = SelectorChain::parse(&["[", "h1"]);

        assert_eq!(chain.first_hit(&doc), Some("h1"));
    }

    #[test]
    fn no_match_is_none() {
        let doc = Html::parse_document("<p>nothing here</p>");
        let chain = SelectorChain::parse(&["main h1", "h1"]);

        assert!(chain.first_match(&doc).is_none());
        assert!(chain.first_hit(&doc).is_none());
    }
}
