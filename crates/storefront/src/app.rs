//! Application bootstrap and event dispatch.
//!
//! [`Storefront`] is the seam between the page and the controllers. The page
//! reports what happened as a [`UiEvent`]; [`Storefront::dispatch`] routes it
//! to the right controller and answers with the [`Effect`]s the page should
//! apply. Errors stop here: they are logged, and the ones a visitor can act on
//! become toasts.

use std::sync::Arc;
use std::time::Duration;

use rooftop_core::{Product, Theme};

use crate::cart::{CHECKOUT_PAGE, CartManager, CartSignal, Checkout, CheckoutSummary, SignalBuffer};
use crate::config::CafeConfig;
use crate::controllers::contact::ContactError;
use crate::controllers::shortcuts::{HELP_DURATION, SHORTCUT_HELP};
use crate::controllers::{
    BackToTop, ContactField, ContactForm, ContactSubmission, DarkMode, DropdownMenu,
    FaqAccordion, FieldError, KeyPress, KeyboardShortcuts, NavbarScroll, NavbarState,
    Newsletter, Promo, PromoBanner, Search, Shortcut, Sidebar, TestimonialSlider,
    VisitorCounter,
};
use crate::error::{AppError, Result};
use crate::storage::{ExpiringStore, KeyValueStore};
use crate::toast::Toast;

/// Element counts of the current page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageLayout {
    /// Header dropdown menus.
    pub dropdowns: usize,
    /// Testimonial slides.
    pub testimonials: usize,
    /// FAQ entries.
    pub faq_items: usize,
    /// Rendered width of one testimonial slide.
    pub slide_width_px: u32,
}

impl Default for PageLayout {
    fn default() -> Self {
        Self {
            dropdowns: 2,
            testimonials: 3,
            faq_items: 6,
            slide_width_px: 360,
        }
    }
}

/// Something that happened on the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    AddToCart(Product),
    RemoveFromCart { name: String },
    DecrementCartItem { name: String },
    /// A quantity typed into the cart; zero removes the line.
    SetCartQuantity { name: String, quantity: u32 },
    ClearCart,
    /// The cart icon in the header was clicked.
    CartButton,
    /// The visitor accepted the checkout confirmation.
    CheckoutConfirmed,
    SidebarOpen,
    SidebarClose,
    SidebarLinkClicked,
    DropdownToggle(usize),
    DropdownKey { index: usize, press: KeyPress },
    /// A click that no other handler consumed.
    DocumentClick,
    Key(KeyPress),
    Search { query: String },
    ThemeToggle,
    Scroll { y: u32 },
    BackToTopClicked,
    NewsletterSubmit { email: String },
    ContactFieldBlur { field: ContactField, value: String },
    ContactSubmit(ContactSubmission),
    SliderNext,
    SliderPrev,
    SliderHover { inside: bool },
    Swipe { start_x: i32, end_x: i32 },
    AutoSlideTick,
    FaqToggle(usize),
    PromoTick,
}

/// Something the page should do in response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Show `count` on the cart badge (hide it at zero).
    Badge { count: u32 },
    /// Show the cart banner for `duration`.
    CartNotice { message: String, duration: Duration },
    Toast(Toast),
    /// Ask the visitor to confirm checkout; answer with
    /// [`UiEvent::CheckoutConfirmed`] if they accept.
    ConfirmCheckout {
        text: String,
        summary: CheckoutSummary,
    },
    Navigate { href: String },
    Theme {
        theme: Theme,
        icon: &'static str,
        aria_pressed: &'static str,
    },
    Sidebar { open: bool },
    Dropdown { open: Option<usize> },
    FocusSearch,
    Navbar(NavbarState),
    BackToTop { visible: bool },
    ScrollTo { top: u32 },
    Slide { index: usize, offset_px: u64 },
    Faq {
        open: Option<usize>,
        scroll_into_view: bool,
    },
    Promo(Promo),
    FieldError(FieldError),
    FieldValid(ContactField),
    /// Clear every input of the contact form.
    ContactFormReset,
    /// Clear the newsletter email input.
    NewsletterReset,
}

/// Every controller of a page, wired to one store.
pub struct Storefront {
    config: CafeConfig,
    layout: PageLayout,
    dark_mode: DarkMode,
    sidebar: Sidebar,
    dropdown: DropdownMenu,
    search: Search,
    cart: CartManager,
    cart_signals: Arc<SignalBuffer>,
    navbar: NavbarScroll,
    back_to_top: BackToTop,
    newsletter: Newsletter,
    slider: TestimonialSlider,
    contact: ContactForm,
    faq: FaqAccordion,
    visitor: VisitorCounter,
    promo: PromoBanner,
    shortcuts: KeyboardShortcuts,
}

impl Storefront {
    /// Build every controller in page order and return the startup effects.
    ///
    /// Startup applies the saved theme, loads the cart and publishes its
    /// badge, counts the visit, and shows the first promotion.
    #[must_use]
    pub fn bootstrap(
        config: CafeConfig,
        store: Arc<dyn KeyValueStore>,
        layout: PageLayout,
    ) -> (Self, Vec<Effect>) {
        let sidebar = Sidebar::new();
        let dropdown = DropdownMenu::new(layout.dropdowns);
        let search = Search::new();
        let dark_mode = DarkMode::new(store.clone());
        let cart_signals = Arc::new(SignalBuffer::new());
        let cart = CartManager::new(store.clone(), cart_signals.clone());
        let navbar = NavbarScroll::new(config.scroll_threshold);
        let back_to_top = BackToTop::new();
        let newsletter = Newsletter::new(config.newsletter_delay);
        let slider = TestimonialSlider::new(layout.testimonials);
        let contact = ContactForm::new(config.contact_delay);
        let faq = FaqAccordion::new(layout.faq_items);
        let shortcuts = KeyboardShortcuts;
        let visitor = VisitorCounter::new(ExpiringStore::new(store));
        let promo = PromoBanner::new();

        let mut storefront = Self {
            config,
            layout,
            dark_mode,
            sidebar,
            dropdown,
            search,
            cart,
            cart_signals,
            navbar,
            back_to_top,
            newsletter,
            slider,
            contact,
            faq,
            visitor,
            promo,
            shortcuts,
        };

        let mut effects = vec![storefront.theme_effect()];
        storefront.cart.publish_badge();
        storefront.drain_cart_signals(&mut effects);

        let (visits, greeting) = storefront.visitor.record_visit();
        effects.extend(greeting.toast().map(Effect::Toast));
        effects.extend(storefront.promo.current().map(Effect::Promo));

        tracing::info!(
            theme = %storefront.dark_mode.theme(),
            cart_items = storefront.cart.item_count(),
            visits,
            "Storefront initialized"
        );
        (storefront, effects)
    }

    /// Timer events the page should send, with their periods.
    #[must_use]
    pub fn periodic_events(&self) -> Vec<(Duration, UiEvent)> {
        let mut events = vec![(self.config.promo_interval, UiEvent::PromoTick)];
        if self.slider.total() > 0 {
            events.push((self.config.auto_slide_interval, UiEvent::AutoSlideTick));
        }
        events
    }

    /// Handle one event. Never fails; errors are logged and, where useful,
    /// shown as toasts.
    pub async fn dispatch(&mut self, event: UiEvent) -> Vec<Effect> {
        let mut effects = Vec::new();
        if let Err(e) = self.handle(event, &mut effects).await {
            match e.user_toast() {
                Some(toast) => {
                    tracing::info!(error = %e, "Rejected input");
                    effects.push(Effect::Toast(toast));
                }
                None if matches!(e, AppError::Contact(_)) => {
                    tracing::info!(error = %e, "Rejected input");
                }
                None => tracing::error!(error = %e, "Event handler failed"),
            }
        }
        self.drain_cart_signals(&mut effects);
        effects
    }

    async fn handle(&mut self, event: UiEvent, effects: &mut Vec<Effect>) -> Result<()> {
        match event {
            UiEvent::AddToCart(product) => {
                self.cart.add(&product);
            }
            UiEvent::RemoveFromCart { name } => {
                self.cart.remove(&name);
            }
            UiEvent::DecrementCartItem { name } => {
                self.cart.decrement(&name);
            }
            UiEvent::SetCartQuantity { name, quantity } => {
                self.cart.set_quantity(&name, quantity);
            }
            UiEvent::ClearCart => {
                self.cart.clear();
            }
            UiEvent::CartButton => match self.cart.checkout() {
                Checkout::Empty { message } => effects.push(Effect::Toast(Toast::info(message))),
                Checkout::Confirm(summary) => effects.push(Effect::ConfirmCheckout {
                    text: summary.confirmation_text(),
                    summary,
                }),
            },
            UiEvent::CheckoutConfirmed => {
                if !self.cart.is_empty() {
                    tracing::info!(
                        lines = self.cart.items().len(),
                        total = %self.cart.total(),
                        "Handing off to checkout"
                    );
                    effects.push(Effect::Navigate {
                        href: CHECKOUT_PAGE.to_string(),
                    });
                }
            }
            UiEvent::SidebarOpen => {
                self.sidebar.open();
                effects.push(self.sidebar_effect());
            }
            UiEvent::SidebarClose | UiEvent::SidebarLinkClicked => {
                self.sidebar.close();
                effects.push(self.sidebar_effect());
            }
            UiEvent::DropdownToggle(index) => {
                self.check_dropdown(index)?;
                self.dropdown.toggle(index);
                effects.push(self.dropdown_effect());
            }
            UiEvent::DropdownKey { index, press } => {
                self.check_dropdown(index)?;
                if self.dropdown.handle_key(index, &press) {
                    effects.push(self.dropdown_effect());
                }
            }
            UiEvent::DocumentClick => {
                self.dropdown.close_all();
                effects.push(self.dropdown_effect());
            }
            UiEvent::Key(press) => self.handle_key(&press, effects),
            UiEvent::Search { query } => {
                let route = self.search.resolve(&query)?;
                effects.push(Effect::Navigate { href: route.href() });
            }
            UiEvent::ThemeToggle => {
                self.dark_mode.toggle();
                effects.push(self.theme_effect());
            }
            UiEvent::Scroll { y } => {
                effects.push(Effect::Navbar(self.navbar.update(y)));
                effects.push(Effect::BackToTop {
                    visible: self.back_to_top.handle_scroll(y),
                });
            }
            UiEvent::BackToTopClicked => effects.push(Effect::ScrollTo {
                top: self.back_to_top.target(),
            }),
            UiEvent::NewsletterSubmit { email } => {
                let subscription = self.newsletter.subscribe(&email).await?;
                effects.push(Effect::Toast(Toast::success(subscription.message)));
                effects.push(Effect::NewsletterReset);
            }
            UiEvent::ContactFieldBlur { field, value } => {
                effects.push(match ContactForm::validate_field(field, &value) {
                    Ok(()) => Effect::FieldValid(field),
                    Err(error) => Effect::FieldError(error),
                });
            }
            UiEvent::ContactSubmit(submission) => match self.contact.submit(&submission).await {
                Ok(message) => {
                    effects.push(Effect::Toast(Toast::success(message)));
                    effects.push(Effect::ContactFormReset);
                }
                Err(ContactError::Invalid(errors)) => {
                    effects.extend(errors.iter().copied().map(Effect::FieldError));
                    return Err(ContactError::Invalid(errors).into());
                }
            },
            UiEvent::SliderNext => {
                self.slider.next();
                effects.extend(self.slide_effect());
            }
            UiEvent::SliderPrev => {
                self.slider.prev();
                effects.extend(self.slide_effect());
            }
            UiEvent::SliderHover { inside } => {
                if inside {
                    self.slider.pause();
                } else {
                    self.slider.resume();
                }
            }
            UiEvent::Swipe { start_x, end_x } => {
                if self.slider.handle_swipe(start_x, end_x).is_some() {
                    effects.extend(self.slide_effect());
                }
            }
            UiEvent::AutoSlideTick => {
                if self.slider.tick().is_some() {
                    effects.extend(self.slide_effect());
                }
            }
            UiEvent::FaqToggle(index) => {
                if index >= self.layout.faq_items {
                    return Err(AppError::UnknownTarget(format!("faq item {index}")));
                }
                let scroll_into_view = self.faq.toggle(index);
                effects.push(Effect::Faq {
                    open: self.faq.open_index(),
                    scroll_into_view,
                });
            }
            UiEvent::PromoTick => effects.extend(self.promo.tick().map(Effect::Promo)),
        }
        Ok(())
    }

    fn handle_key(&mut self, press: &KeyPress, effects: &mut Vec<Effect>) {
        if self.sidebar.handle_key(press) {
            effects.push(self.sidebar_effect());
            return;
        }
        match self.shortcuts.resolve(press) {
            Some(Shortcut::FocusSearch) => effects.push(Effect::FocusSearch),
            Some(Shortcut::ToggleSidebar) => {
                self.sidebar.toggle();
                effects.push(self.sidebar_effect());
            }
            Some(Shortcut::ToggleTheme) => {
                self.dark_mode.toggle();
                effects.push(self.theme_effect());
            }
            Some(Shortcut::ShowHelp) => effects.push(Effect::Toast(
                Toast::info(SHORTCUT_HELP).with_duration(HELP_DURATION),
            )),
            None => {}
        }
    }

    fn check_dropdown(&self, index: usize) -> Result<()> {
        if index < self.layout.dropdowns {
            Ok(())
        } else {
            Err(AppError::UnknownTarget(format!("dropdown {index}")))
        }
    }

    fn drain_cart_signals(&self, effects: &mut Vec<Effect>) {
        for signal in self.cart_signals.drain() {
            effects.push(match signal {
                CartSignal::Badge { count } => Effect::Badge { count },
                CartSignal::Added { message, .. } => Effect::CartNotice {
                    message,
                    duration: self.config.notification_duration,
                },
            });
        }
    }

    fn theme_effect(&self) -> Effect {
        let theme = self.dark_mode.theme();
        Effect::Theme {
            theme,
            icon: theme.toggle_icon(),
            aria_pressed: self.dark_mode.aria_pressed(),
        }
    }

    const fn sidebar_effect(&self) -> Effect {
        Effect::Sidebar {
            open: self.sidebar.is_open(),
        }
    }

    const fn dropdown_effect(&self) -> Effect {
        Effect::Dropdown {
            open: self.dropdown.open_index(),
        }
    }

    fn slide_effect(&self) -> Option<Effect> {
        (self.slider.total() > 0).then(|| Effect::Slide {
            index: self.slider.current(),
            offset_px: self.slider.offset_px(self.layout.slide_width_px),
        })
    }

    /// The cart.
    #[must_use]
    pub const fn cart(&self) -> &CartManager {
        &self.cart
    }

    /// The active theme.
    #[must_use]
    pub const fn theme(&self) -> Theme {
        self.dark_mode.theme()
    }

    #[must_use]
    pub const fn sidebar(&self) -> &Sidebar {
        &self.sidebar
    }

    #[must_use]
    pub const fn slider(&self) -> &TestimonialSlider {
        &self.slider
    }

    #[must_use]
    pub const fn config(&self) -> &CafeConfig {
        &self.config
    }
}

impl std::fmt::Debug for Storefront {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Storefront")
            .field("layout", &self.layout)
            .field("theme", &self.dark_mode.theme())
            .field("cart", &self.cart)
            .finish_non_exhaustive()
    }
}
