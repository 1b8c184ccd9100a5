// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

//! The `FuncVariation` counter contract.
//!
//! The contract keeps a single counter and exposes several ways to increase
//! it, two of which accept an attached value. The value itself is held by
//! the contract's account in the session; the contract only decides whether
//! a call is acceptable.

use serde::{Deserialize, Serialize};

use crate::call::{Call, Output};
use crate::error::{ContractError, PanicCode};
use crate::session::Address;
use crate::units::{Wei, ETHER};

/// The exact value `payExactToIncrement` requires: 0.01 ether.
pub const FIXED_FEE: Wei = ETHER / 100;

/// Revert reason of `payExactToIncrement` when the attached value is not
/// [`FIXED_FEE`].
pub const FIXED_FEE_REASON: &str = "must pay 0.01 Eth";

/// Topic of [`Event::CountChanged`].
pub const COUNT_CHANGED: &str = "count_changed";

/// Topic of [`Event::PaymentReceived`].
pub const PAYMENT_RECEIVED: &str = "payment_received";

/// Event emitted by a successful call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "topic", rename_all = "snake_case")]
pub enum Event {
    /// The counter changed.
    CountChanged {
        /// Previous value.
        old_value: u64,
        /// New value.
        new_value: u64,
    },
    /// A paying call received a non-zero value.
    PaymentReceived {
        /// The paying account.
        from: Address,
        /// The attached value.
        value: Wei,
    },
}

impl Event {
    /// The event topic.
    #[must_use]
    pub const fn topic(&self) -> &'static str {
        match self {
            Self::CountChanged { .. } => COUNT_CHANGED,
            Self::PaymentReceived { .. } => PAYMENT_RECEIVED,
        }
    }
}

/// Environment of a single call: who called, what they attached, and the
/// events emitted so far.
#[derive(Debug, Clone)]
pub struct CallContext {
    caller: Address,
    value: Wei,
    events: Vec<Event>,
}

impl CallContext {
    /// Creates the context of a call from `caller` carrying `value`.
    #[must_use]
    pub fn new(caller: Address, value: Wei) -> Self {
        Self {
            caller,
            value,
            events: Vec::new(),
        }
    }

    /// The calling account.
    #[must_use]
    pub fn caller(&self) -> Address {
        self.caller
    }

    /// The value attached to the call.
    #[must_use]
    pub fn value(&self) -> Wei {
        self.value
    }

    /// Records an event.
    pub fn emit(&mut self, event: Event) {
        self.events.push(event);
    }

    /// The events emitted so far.
    #[must_use]
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Consumes the context, returning its events.
    #[must_use]
    pub fn into_events(self) -> Vec<Event> {
        self.events
    }
}

/// Contract state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FuncVariation {
    /// Current count value.
    count: u64,
}

impl FuncVariation {
    /// Initialize a new counter with zero.
    #[must_use]
    pub const fn new() -> Self {
        Self { count: 0 }
    }

    /// Get the current count.
    #[must_use]
    pub fn get(&self) -> u64 {
        self.count
    }

    /// Increment the counter by one.
    ///
    /// # Errors
    ///
    /// Panics with [`PanicCode::ArithmeticUnderOrOverflow`] if the counter
    /// would overflow.
    pub fn inc(&mut self, ctx: &mut CallContext) -> Result<(), ContractError> {
        self.add(ctx, 1)
    }

    /// Add `amount` to the counter.
    ///
    /// # Errors
    ///
    /// Panics with [`PanicCode::ArithmeticUnderOrOverflow`] if the counter
    /// would overflow.
    pub fn inc_with(&mut self, ctx: &mut CallContext, amount: u64) -> Result<(), ContractError> {
        self.add(ctx, amount)
    }

    /// Add `amount` to the counter, keeping whatever value is attached.
    ///
    /// # Errors
    ///
    /// Panics with [`PanicCode::ArithmeticUnderOrOverflow`] if the counter
    /// would overflow.
    pub fn payme_to_increment(
        &mut self,
        ctx: &mut CallContext,
        amount: u64,
    ) -> Result<(), ContractError> {
        self.add(ctx, amount)?;
        received(ctx);
        Ok(())
    }

    /// Add `amount` to the counter in exchange for exactly [`FIXED_FEE`].
    ///
    /// # Errors
    ///
    /// Reverts with [`FIXED_FEE_REASON`] if the attached value differs from
    /// [`FIXED_FEE`], and panics on overflow.
    pub fn pay_exact_to_increment(
        &mut self,
        ctx: &mut CallContext,
        amount: u64,
    ) -> Result<(), ContractError> {
        if ctx.value() != FIXED_FEE {
            return Err(ContractError::Revert(FIXED_FEE_REASON.to_string()));
        }
        self.add(ctx, amount)?;
        received(ctx);
        Ok(())
    }

    /// Decrement the counter by one.
    ///
    /// # Errors
    ///
    /// Panics with [`PanicCode::ArithmeticUnderOrOverflow`] if the counter is
    /// zero.
    pub fn dec(&mut self, ctx: &mut CallContext) -> Result<(), ContractError> {
        let new_value = self
            .count
            .checked_sub(1)
            .ok_or(ContractError::Panic(PanicCode::ArithmeticUnderOrOverflow))?;
        self.set(ctx, new_value);
        Ok(())
    }

    /// Dispatches `call` to the matching function.
    ///
    /// Value attached to a function that is not payable is refused before
    /// the function runs.
    ///
    /// # Errors
    ///
    /// Returns the error of the called function, or
    /// [`ContractError::NonPayable`].
    pub fn execute(&mut self, call: Call, ctx: &mut CallContext) -> Result<Output, ContractError> {
        if ctx.value() > 0 && !call.is_payable() {
            return Err(ContractError::NonPayable {
                function: call.name().to_string(),
            });
        }

        match call {
            Call::Get => return Ok(Output::Count(self.get())),
            Call::Inc => self.inc(ctx)?,
            Call::IncWith(amount) => self.inc_with(ctx, amount)?,
            Call::PaymeToIncrement(amount) => self.payme_to_increment(ctx, amount)?,
            Call::PayExactToIncrement(amount) => self.pay_exact_to_increment(ctx, amount)?,
            Call::Dec => self.dec(ctx)?,
        }
        Ok(Output::Unit)
    }

    fn add(&mut self, ctx: &mut CallContext, amount: u64) -> Result<(), ContractError> {
        let new_value = self
            .count
            .checked_add(amount)
            .ok_or(ContractError::Panic(PanicCode::ArithmeticUnderOrOverflow))?;
        self.set(ctx, new_value);
        Ok(())
    }

    fn set(&mut self, ctx: &mut CallContext, new_value: u64) {
        let old_value = self.count;
        self.count = new_value;
        ctx.emit(Event::CountChanged {
            old_value,
            new_value,
        });
    }
}

fn received(ctx: &mut CallContext) {
    if ctx.value() > 0 {
        let event = Event::PaymentReceived {
            from: ctx.caller(),
            value: ctx.value(),
        };
        ctx.emit(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx(value: Wei) -> CallContext {
        CallContext::new(Address::from_name("owner"), value)
    }

    #[test]
    fn starts_at_zero() {
        assert_eq!(FuncVariation::new().get(), 0);
        assert_eq!(FuncVariation::default(), FuncVariation::new());
    }

    #[test]
    fn increments_emit_count_changed() {
        let mut counter = FuncVariation::new();
        let mut ctx = ctx(0);

        counter.inc(&mut ctx).expect("inc succeeds");
        counter.inc_with(&mut ctx, 10).expect("inc_with succeeds");

        assert_eq!(counter.get(), 11);
        assert_eq!(
            ctx.events(),
            &[
                Event::CountChanged {
                    old_value: 0,
                    new_value: 1
                },
                Event::CountChanged {
                    old_value: 1,
                    new_value: 11
                },
            ]
        );
    }

    #[test]
    fn payme_records_payment_only_when_value_attached() {
        let mut counter = FuncVariation::new();

        let mut unpaid = ctx(0);
        counter
            .payme_to_increment(&mut unpaid, 10)
            .expect("unpaid increment succeeds");
        assert!(unpaid
            .events()
            .iter()
            .all(|event| event.topic() == COUNT_CHANGED));

        let mut paid = ctx(100);
        counter
            .payme_to_increment(&mut paid, 10)
            .expect("paid increment succeeds");
        assert_eq!(counter.get(), 20);
        assert!(paid.events().contains(&Event::PaymentReceived {
            from: Address::from_name("owner"),
            value: 100,
        }));
    }

    #[test]
    fn pay_exact_requires_the_fixed_fee() {
        let mut counter = FuncVariation::new();

        for value in [0, FIXED_FEE / 10, FIXED_FEE - 1, FIXED_FEE + 1] {
            let mut ctx = ctx(value);
            let err = counter
                .pay_exact_to_increment(&mut ctx, 10)
                .expect_err("wrong fee should revert");
            assert_eq!(err.reason(), Some(FIXED_FEE_REASON));
            assert!(ctx.events().is_empty());
        }
        assert_eq!(counter.get(), 0);

        let mut ctx = ctx(FIXED_FEE);
        counter
            .pay_exact_to_increment(&mut ctx, 10)
            .expect("exact fee succeeds");
        assert_eq!(counter.get(), 10);
    }

    #[test]
    fn dec_underflow_leaves_counter_untouched() {
        let mut counter = FuncVariation::new();
        let mut ctx = ctx(0);

        let err = counter.dec(&mut ctx).expect_err("dec on zero panics");
        assert_eq!(err.panic_code(), Some(PanicCode::ArithmeticUnderOrOverflow));
        assert_eq!(counter.get(), 0);

        counter.inc(&mut ctx).expect("inc succeeds");
        counter.dec(&mut ctx).expect("dec succeeds");
        assert_eq!(counter.get(), 0);
    }

    #[test]
    fn overflow_is_checked() {
        let mut counter = FuncVariation::new();
        let mut ctx = ctx(0);

        counter.inc_with(&mut ctx, u64::MAX).expect("fits exactly");
        let err = counter.inc(&mut ctx).expect_err("overflow panics");
        assert_eq!(err.panic_code(), Some(PanicCode::ArithmeticUnderOrOverflow));
        assert_eq!(counter.get(), u64::MAX);
    }

    #[test]
    fn execute_refuses_value_on_non_payable_functions() {
        let mut counter = FuncVariation::new();

        for call in [Call::Inc, Call::IncWith(1), Call::Dec, Call::Get] {
            let mut ctx = ctx(1);
            let err = counter.execute(call, &mut ctx).expect_err("not payable");
            assert_eq!(
                err,
                ContractError::NonPayable {
                    function: call.name().to_string()
                }
            );
        }
        assert_eq!(counter.get(), 0);

        let mut ctx = ctx(0);
        assert_eq!(
            counter.execute(Call::IncWith(3), &mut ctx).expect("succeeds"),
            Output::Unit
        );
        assert_eq!(
            counter.execute(Call::Get, &mut ctx).expect("succeeds"),
            Output::Count(3)
        );
    }
}
