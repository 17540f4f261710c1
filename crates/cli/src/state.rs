//! Storefront state owned by the interactive session.

use chrono::{DateTime, Utc};
use sebastian_clothes_core::{
    Catalog, CatalogQuery, CheckoutOutcome, CheckoutProvider, CheckoutRequest, DisplayImage,
    ImageResolver, LineId, Product, ProductId, PromoCountdown, RemoteImageProvider, RevealWindow,
    Session, Size, SortMode, StubCheckout, Theme,
};

use crate::config::ShopConfig;
use crate::error::CommandError;
use crate::preferences::PreferenceStore;

/// Everything one running storefront needs.
///
/// The catalog is re-queried whenever the listing is read, so the visible
/// products always reflect the current search, filter and sort.
pub struct ShopState {
    catalog: Catalog,
    session: Session,
    query: CatalogQuery,
    reveal: RevealWindow,
    images: ImageResolver<RemoteImageProvider>,
    checkout: StubCheckout,
    countdown: PromoCountdown,
    preferences: PreferenceStore,
}

impl ShopState {
    /// Build the state from configuration. `now` anchors the default promo
    /// countdown.
    #[must_use]
    pub fn new(catalog: Catalog, config: &ShopConfig, now: DateTime<Utc>) -> Self {
        let preferences = PreferenceStore::new(&config.preferences_path);
        let session = Session::new(config.free_shipping).with_theme(preferences.theme_or_default());
        let countdown = config
            .promo_ends_at
            .map_or_else(|| PromoCountdown::until_midnight(now), PromoCountdown::new);

        Self {
            catalog,
            session,
            query: CatalogQuery::default(),
            reveal: RevealWindow::new(config.page_size),
            images: ImageResolver::new(RemoteImageProvider::default(), &config.image_fallback),
            checkout: StubCheckout,
            countdown,
            preferences,
        }
    }

    /// The session (read-only; mutate through the methods below).
    #[must_use]
    pub const fn session(&self) -> &Session {
        &self.session
    }

    /// The catalog.
    #[must_use]
    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Current listing parameters.
    #[must_use]
    pub const fn query(&self) -> &CatalogQuery {
        &self.query
    }

    // =========================================================================
    // Listing
    // =========================================================================

    /// Full listing for the current query.
    #[must_use]
    pub fn listing(&self) -> Vec<&Product> {
        self.catalog.query(&self.query)
    }

    /// Visible part of the listing and the number of hidden rows.
    #[must_use]
    pub fn visible_listing(&self) -> (Vec<&Product>, usize) {
        let all = self.listing();
        let visible = self.reveal.visible(&all).to_vec();
        let hidden = all.len() - visible.len();
        (visible, hidden)
    }

    /// Change the name search.
    pub fn set_search(&mut self, search: &str) {
        self.query.search = search.to_string();
        self.reveal.reset();
    }

    /// Change the size filter.
    pub fn set_size(&mut self, size: Option<Size>) {
        self.query.size = size;
        self.reveal.reset();
    }

    /// Change the sort mode.
    pub fn set_sort(&mut self, sort: SortMode) {
        self.query.sort = sort;
        self.reveal.reset();
    }

    /// Show one more page. Returns whether anything new became visible.
    pub fn reveal_more(&mut self) -> bool {
        let total = self.listing().len();
        self.reveal.reveal_more(total)
    }

    // =========================================================================
    // Products and cart
    // =========================================================================

    /// Look up a product.
    ///
    /// # Errors
    ///
    /// Returns [`CommandError::UnknownProduct`] if no product has this id.
    pub fn product(&self, id: &ProductId) -> Result<&Product, CommandError> {
        self.catalog
            .get(id)
            .ok_or_else(|| CommandError::UnknownProduct(id.clone()))
    }

    /// Open the quick view for a product; returns its resolved image.
    ///
    /// # Errors
    ///
    /// Returns [`CommandError::UnknownProduct`] if no product has this id.
    pub fn open_quick_view(&mut self, id: &ProductId) -> Result<DisplayImage, CommandError> {
        let product = self
            .catalog
            .get(id)
            .ok_or_else(|| CommandError::UnknownProduct(id.clone()))?;
        self.session.open_quick_view(product);
        Ok(self.images.resolve(&product.image))
    }

    /// Close the quick view.
    pub fn close_quick_view(&mut self) {
        self.session.close_quick_view();
    }

    /// Put one unit of a product in the cart.
    ///
    /// The size buttons only offer sizes the product is made in, so other
    /// sizes are refused here.
    ///
    /// # Errors
    ///
    /// Returns an error for an unknown product or a size it is not made in.
    pub fn add_to_cart(&mut self, id: &ProductId, size: Size) -> Result<LineId, CommandError> {
        let product = self
            .catalog
            .get(id)
            .ok_or_else(|| CommandError::UnknownProduct(id.clone()))?;
        if !product.has_size(size) {
            return Err(CommandError::SizeNotOffered {
                product: id.clone(),
                size,
            });
        }
        Ok(self.session.add_to_cart(product, size))
    }

    /// Adjust a line quantity; unknown lines are ignored.
    pub fn change_quantity(&mut self, line: &LineId, delta: i64) -> Option<u32> {
        self.session.change_quantity(line, delta)
    }

    /// Remove a line; unknown lines are ignored.
    pub fn remove_line(&mut self, line: &LineId) -> bool {
        self.session.remove_line(line)
    }

    /// Open or close the cart drawer.
    pub const fn set_cart_open(&mut self, open: bool) {
        self.session.set_cart_open(open);
    }

    /// Flip a favorite.
    ///
    /// # Errors
    ///
    /// Returns [`CommandError::UnknownProduct`] if no product has this id.
    pub fn toggle_favorite(&mut self, id: &ProductId) -> Result<bool, CommandError> {
        self.product(id)?;
        Ok(self.session.toggle_favorite(id))
    }

    /// Flip the navigation menu.
    pub const fn toggle_menu(&mut self) -> bool {
        self.session.toggle_menu()
    }

    /// Switch theme and persist it. A failed write is logged, not fatal.
    pub fn toggle_theme(&mut self) -> Theme {
        let theme = self.session.toggle_theme();
        if let Err(e) = self.preferences.set_theme(theme) {
            tracing::warn!(error = %e, "theme not saved");
        }
        theme
    }

    /// Countdown text at `now`.
    #[must_use]
    pub fn countdown(&self, now: DateTime<Utc>) -> String {
        if self.countdown.is_over(now) {
            "The promotion has ended.".to_string()
        } else {
            format!("Promotion ends in {}", self.countdown.display(now))
        }
    }

    /// Hand the cart to the checkout provider.
    ///
    /// # Errors
    ///
    /// Returns [`CommandError::Checkout`] when the provider refuses.
    pub fn checkout(&self) -> Result<CheckoutOutcome, CommandError> {
        let request = CheckoutRequest::from_session(&self.session);
        Ok(self.checkout.begin(&request)?)
    }
}
