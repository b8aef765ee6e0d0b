/// Generate the public operations shared by the async and blocking clients.
///
/// The surrounding `impl` must provide `list::<T>(&Endpoint)` and
/// `fetch(&Endpoint) -> Result<serde_json::Value, NewsError>`, both either
/// `async` or blocking to match the tokens passed in:
///
/// ```rust,ignore
/// impl CryptoNews { news_operations!(async); }
/// impl blocking::CryptoNews { news_operations!(blocking); }
/// ```
macro_rules! news_operations {
    (async) => {
        $crate::macros::news_operations!(@impl [async] [.await]);
    };
    (blocking) => {
        $crate::macros::news_operations!(@impl [] []);
    };
    (@impl [$($asyncness:tt)*] [$($dot_await:tt)*]) => {
        /// Latest articles across all outlets, or from one outlet when `source`
        /// is given (e.g. `"coindesk"`, see [`cryptonews_types::KnownSource`]).
        ///
        /// # Errors
        /// Transport, decode, or schema-mismatch failure of the single request.
        pub $($asyncness)* fn get_latest(
            &self,
            limit: u32,
            source: Option<&str>,
        ) -> Result<Vec<cryptonews_types::Article>, cryptonews_types::NewsError> {
            self.list(&$crate::Endpoint::Latest { limit, source }) $($dot_await)*
        }

        /// Articles matching comma-separated `keywords`.
        ///
        /// # Errors
        /// Transport, decode, or schema-mismatch failure of the single request.
        pub $($asyncness)* fn search(
            &self,
            keywords: &str,
            limit: u32,
        ) -> Result<Vec<cryptonews_types::Article>, cryptonews_types::NewsError> {
            self.list(&$crate::Endpoint::Search { keywords, limit }) $($dot_await)*
        }

        /// DeFi news.
        ///
        /// # Errors
        /// Transport, decode, or schema-mismatch failure of the single request.
        pub $($asyncness)* fn get_defi(
            &self,
            limit: u32,
        ) -> Result<Vec<cryptonews_types::Article>, cryptonews_types::NewsError> {
            self.list(&$crate::Endpoint::Defi { limit }) $($dot_await)*
        }

        /// Bitcoin news.
        ///
        /// # Errors
        /// Transport, decode, or schema-mismatch failure of the single request.
        pub $($asyncness)* fn get_bitcoin(
            &self,
            limit: u32,
        ) -> Result<Vec<cryptonews_types::Article>, cryptonews_types::NewsError> {
            self.list(&$crate::Endpoint::Bitcoin { limit }) $($dot_await)*
        }

        /// Breaking news. The server defines the window (last two hours).
        ///
        /// # Errors
        /// Transport, decode, or schema-mismatch failure of the single request.
        pub $($asyncness)* fn get_breaking(
            &self,
            limit: u32,
        ) -> Result<Vec<cryptonews_types::Article>, cryptonews_types::NewsError> {
            self.list(&$crate::Endpoint::Breaking { limit }) $($dot_await)*
        }

        /// Every outlet the server aggregates.
        ///
        /// # Errors
        /// Transport, decode, or schema-mismatch failure of the single request.
        pub $($asyncness)* fn get_sources(
            &self,
        ) -> Result<Vec<cryptonews_types::Source>, cryptonews_types::NewsError> {
            self.list(&$crate::Endpoint::Sources) $($dot_await)*
        }

        /// Full listing envelope (articles plus `totalCount` and contributing
        /// outlets) for any article endpoint.
        ///
        /// # Errors
        /// `InvalidArg` for [`Endpoint::Sources`](crate::Endpoint::Sources),
        /// otherwise the same failures as the list operations.
        pub $($asyncness)* fn feed(
            &self,
            endpoint: &$crate::Endpoint<'_>,
        ) -> Result<cryptonews_types::NewsFeed, cryptonews_types::NewsError> {
            if endpoint.collection() != cryptonews_types::Collection::Articles {
                return Err(cryptonews_types::NewsError::invalid_arg(format!(
                    "{} does not return an article listing",
                    endpoint.name()
                )));
            }
            let body = self.fetch(endpoint) $($dot_await)* ?;
            $crate::decode::into_feed(endpoint.name(), body)
        }
    };
}

pub(crate) use news_operations;
