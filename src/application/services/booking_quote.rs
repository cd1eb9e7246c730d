//! # Booking Quotes
//!
//! Prices a set of billboards booked together by one customer for one
//! rental duration, and totals the booking with an optional discount.
//!
//! # Totals
//!
//! ```text
//! line     = term price            (Months)
//!          = daily rate × days     (Days)
//! subtotal = Σ priced lines
//! discount = round(subtotal × pct / 100, 2)
//! total    = subtotal − discount
//! ```
//!
//! Lines without a tariff stay unpriced (`None`) and do not count towards
//! the subtotal; they are never treated as free.
//!
//! # Examples
//!
//! ```
//! use billboard_pricing::application::services::booking_quote::{
//!     BookingItem, BookingQuoteService, BookingRequest,
//! };
//! use billboard_pricing::domain::entities::{TariffRow, TariffTable};
//! use billboard_pricing::domain::value_objects::{Price, RentalDuration};
//! use rust_decimal::Decimal;
//!
//! let table = TariffTable::new(vec![
//!     TariffRow::new("4x12", "A", "عادي").with_one_month(3500),
//! ]);
//! let request = BookingRequest::new("عادي", RentalDuration::Months(1))
//!     .with_item(BookingItem::new("BB-001", "12x4"))
//!     .with_item(BookingItem::new("BB-002", "4x12"))
//!     .with_discount_pct(Decimal::TEN);
//!
//! let quote = BookingQuoteService::default().quote(&table, &request).unwrap();
//! assert_eq!(quote.subtotal(), Price::from(7000));
//! assert_eq!(quote.total(), Price::from(6300));
//! ```

use crate::domain::entities::TariffTable;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::services::{PriceQuery, PricingResolver};
use crate::domain::value_objects::arithmetic::{
    CheckedArithmetic, Rounding, checked_sum, percent_of, round_money,
};
use crate::domain::value_objects::{CanonicalSize, MatchTier, Price, RentalDuration};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Decimal places of quoted money amounts.
pub const MONEY_DECIMAL_PLACES: u32 = 2;

/// One billboard in a booking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingItem {
    /// Billboard identifier.
    pub billboard_id: String,
    /// Billboard size, in any accepted spelling.
    pub size: String,
    /// Billboard level; the default level when absent.
    #[serde(default)]
    pub level: Option<String>,
}

impl BookingItem {
    /// Creates an item with the default level.
    #[must_use]
    pub fn new(billboard_id: impl Into<String>, size: impl Into<String>) -> Self {
        Self {
            billboard_id: billboard_id.into(),
            size: size.into(),
            level: None,
        }
    }

    /// Sets the billboard level.
    #[must_use]
    pub fn with_level(mut self, level: impl Into<String>) -> Self {
        self.level = Some(level.into());
        self
    }
}

/// A booking to be quoted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingRequest {
    /// Customer category the booking is priced under.
    pub category: String,
    /// Rental duration shared by every item.
    pub duration: RentalDuration,
    /// Booked billboards.
    #[serde(default)]
    pub items: Vec<BookingItem>,
    /// Discount percentage in `[0, 100]`.
    #[serde(default)]
    pub discount_pct: Decimal,
}

impl BookingRequest {
    /// Creates an empty booking without discount.
    #[must_use]
    pub fn new(category: impl Into<String>, duration: RentalDuration) -> Self {
        Self {
            category: category.into(),
            duration,
            items: Vec::new(),
            discount_pct: Decimal::ZERO,
        }
    }

    /// Adds a billboard.
    #[must_use]
    pub fn with_item(mut self, item: BookingItem) -> Self {
        self.items.push(item);
        self
    }

    /// Sets the discount percentage.
    #[must_use]
    pub fn with_discount_pct(mut self, pct: Decimal) -> Self {
        self.discount_pct = pct;
        self
    }
}

/// A priced booking line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingLine {
    billboard_id: String,
    size: CanonicalSize,
    level: String,
    unit_price: Option<Price>,
    amount: Option<Price>,
    tier: Option<MatchTier>,
}

impl BookingLine {
    /// Returns the billboard identifier.
    #[inline]
    #[must_use]
    pub fn billboard_id(&self) -> &str {
        &self.billboard_id
    }

    /// Returns the canonical size the line was priced at.
    #[inline]
    #[must_use]
    pub fn size(&self) -> &CanonicalSize {
        &self.size
    }

    /// Returns the level of the matched row, or the requested level when unpriced.
    #[inline]
    #[must_use]
    pub fn level(&self) -> &str {
        &self.level
    }

    /// Returns the tariff price: the term price, or the daily rate.
    #[inline]
    #[must_use]
    pub fn unit_price(&self) -> Option<Price> {
        self.unit_price
    }

    /// Returns the line amount.
    #[inline]
    #[must_use]
    pub fn amount(&self) -> Option<Price> {
        self.amount
    }

    /// Returns the match tier that priced the line.
    #[inline]
    #[must_use]
    pub fn tier(&self) -> Option<MatchTier> {
        self.tier
    }

    /// Returns true if a tariff was found for the line.
    #[inline]
    #[must_use]
    pub fn is_priced(&self) -> bool {
        self.amount.is_some()
    }
}

/// A quoted booking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingQuote {
    category: String,
    duration: RentalDuration,
    lines: Vec<BookingLine>,
    subtotal: Price,
    discount_pct: Decimal,
    discount: Price,
    total: Price,
}

impl BookingQuote {
    /// Returns the customer category.
    #[inline]
    #[must_use]
    pub fn category(&self) -> &str {
        &self.category
    }

    /// Returns the rental duration.
    #[inline]
    #[must_use]
    pub fn duration(&self) -> RentalDuration {
        self.duration
    }

    /// Returns the lines, in request order.
    #[inline]
    #[must_use]
    pub fn lines(&self) -> &[BookingLine] {
        &self.lines
    }

    /// Returns the sum of priced lines.
    #[inline]
    #[must_use]
    pub fn subtotal(&self) -> Price {
        self.subtotal
    }

    /// Returns the discount percentage applied.
    #[inline]
    #[must_use]
    pub fn discount_pct(&self) -> Decimal {
        self.discount_pct
    }

    /// Returns the discount amount.
    #[inline]
    #[must_use]
    pub fn discount(&self) -> Price {
        self.discount
    }

    /// Returns the amount due.
    #[inline]
    #[must_use]
    pub fn total(&self) -> Price {
        self.total
    }

    /// Returns true if every line is priced.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.lines.iter().all(BookingLine::is_priced)
    }

    /// Returns the lines that have no tariff.
    pub fn unpriced_lines(&self) -> impl Iterator<Item = &BookingLine> {
        self.lines.iter().filter(|line| !line.is_priced())
    }
}

/// Quotes bookings against a tariff table.
#[derive(Debug, Clone, Copy, Default)]
pub struct BookingQuoteService {
    resolver: PricingResolver,
}

impl BookingQuoteService {
    /// Creates a service using `resolver` to price lines.
    #[must_use]
    pub const fn new(resolver: PricingResolver) -> Self {
        Self { resolver }
    }

    /// Quotes `request` against `table`.
    ///
    /// # Errors
    ///
    /// - `DomainError::InvalidDiscount` if the discount is outside `[0, 100]`
    /// - `DomainError::InvalidDuration` for zero days or fewer than one month
    /// - `DomainError::Arithmetic` if a total overflows
    pub fn quote(&self, table: &TariffTable, request: &BookingRequest) -> DomainResult<BookingQuote> {
        validate_discount(request.discount_pct)?;
        validate_duration(request.duration)?;

        let lines = request
            .items
            .iter()
            .map(|item| self.price_line(table, request, item))
            .collect::<DomainResult<Vec<_>>>()?;

        let subtotal = checked_sum(lines.iter().filter_map(|l| l.amount).map(|p| p.get()))?;
        let discount = round_money(
            percent_of(subtotal, request.discount_pct)?,
            MONEY_DECIMAL_PLACES,
            Rounding::HalfAwayFromZero,
        );
        let total = subtotal.safe_sub(discount)?;

        let quote = BookingQuote {
            category: request.category.clone(),
            duration: request.duration,
            lines,
            subtotal: Price::new(subtotal),
            discount_pct: request.discount_pct,
            discount: Price::new(discount),
            total: Price::new(total),
        };

        tracing::debug!(
            category = %quote.category,
            duration = %quote.duration,
            lines = quote.lines.len(),
            unpriced = quote.unpriced_lines().count(),
            total = %quote.total,
            "booking quoted"
        );
        Ok(quote)
    }

    fn price_line(
        &self,
        table: &TariffTable,
        request: &BookingRequest,
        item: &BookingItem,
    ) -> DomainResult<BookingLine> {
        let query = PriceQuery::new(
            &item.size,
            item.level.as_deref(),
            &request.category,
            request.duration.bucket(),
        );
        let resolution = self.resolver.resolve(table, &query);

        let amount = match (&resolution, request.duration) {
            (Some(r), RentalDuration::Days(days)) => {
                Some(Price::new(r.price().get().safe_mul(Decimal::from(days))?))
            }
            (Some(r), RentalDuration::Months(_)) => Some(r.price()),
            (None, _) => None,
        };

        Ok(BookingLine {
            billboard_id: item.billboard_id.clone(),
            size: query.size().clone(),
            level: resolution
                .as_ref()
                .map_or_else(|| query.level().to_string(), |r| r.matched_level().to_string()),
            unit_price: resolution.as_ref().map(|r| r.price()),
            amount,
            tier: resolution.as_ref().map(|r| r.tier()),
        })
    }
}

fn validate_discount(pct: Decimal) -> DomainResult<()> {
    if pct < Decimal::ZERO || pct > Decimal::ONE_HUNDRED {
        return Err(DomainError::InvalidDiscount(pct));
    }
    Ok(())
}

fn validate_duration(duration: RentalDuration) -> DomainResult<()> {
    match duration {
        RentalDuration::Days(0) => Err(DomainError::invalid_duration("zero days")),
        RentalDuration::Months(m) if m < 1 => Err(DomainError::invalid_duration(format!(
            "{m} months"
        ))),
        _ => Ok(()),
    }
}
