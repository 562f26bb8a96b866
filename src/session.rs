//! Session
//!
//! Textual cart commands, as issued by the CLI, and a session that replays
//! them against a cart.

use std::{fmt, num::NonZeroU32, str::FromStr};

use thiserror::Error;
use tracing::warn;

use crate::{
    cart::{Cart, CartError},
    catalog::Catalog,
    products::ProductId,
    receipt::Receipt,
};

/// Errors that can occur while parsing or applying commands.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// The command string could not be parsed.
    #[error("invalid command '{command}': {reason}")]
    InvalidCommand {
        /// The raw command
        command: String,

        /// Why it was rejected
        reason: &'static str,
    },

    /// The cart rejected the command.
    #[error(transparent)]
    Cart(#[from] CartError),
}

/// A single cart operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartCommand {
    /// `add:ID` or `add:ID:N`
    Add {
        /// Product to add
        id: ProductId,

        /// Units to add
        quantity: NonZeroU32,
    },

    /// `remove:ID`
    Remove(ProductId),

    /// `inc:ID`
    Increment(ProductId),

    /// `dec:ID`
    Decrement(ProductId),

    /// `clear`
    Clear,
}

impl CartCommand {
    /// Apply the command to `cart`.
    ///
    /// # Errors
    ///
    /// Returns the [`CartError`] raised by the underlying cart operation.
    pub fn apply(&self, cart: &mut Cart, catalog: &Catalog) -> Result<(), CartError> {
        match self {
            Self::Add { id, quantity } => {
                cart.add_items(id, *quantity, catalog)?;
            }
            Self::Remove(id) => {
                cart.remove_item(id);
            }
            Self::Increment(id) => {
                cart.increment_quantity(id)?;
            }
            Self::Decrement(id) => {
                cart.decrement_quantity(id)?;
            }
            Self::Clear => {
                cart.clear();
            }
        }

        Ok(())
    }
}

impl FromStr for CartCommand {
    type Err = SessionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason| SessionError::InvalidCommand {
            command: s.to_string(),
            reason,
        };

        let mut parts = s.trim().split(':');
        let verb = parts.next().unwrap_or_default();
        let id = parts
            .next()
            .filter(|id| !id.is_empty())
            .map(ProductId::from);
        let quantity = parts.next();

        if parts.next().is_some() {
            return Err(invalid("too many ':' separated parts"));
        }

        if verb == "clear" {
            return match id {
                None => Ok(Self::Clear),
                Some(_) => Err(invalid("clear takes no product id")),
            };
        }

        let id = id.ok_or_else(|| invalid("missing product id"))?;

        if quantity.is_some() && verb != "add" {
            return Err(invalid("only add takes a quantity"));
        }

        match verb {
            "add" => {
                let quantity = match quantity {
                    Some(raw) => raw
                        .parse::<NonZeroU32>()
                        .map_err(|_err| invalid("quantity must be a positive integer"))?,
                    None => NonZeroU32::MIN,
                };

                Ok(Self::Add { id, quantity })
            }
            "remove" => Ok(Self::Remove(id)),
            "inc" => Ok(Self::Increment(id)),
            "dec" => Ok(Self::Decrement(id)),
            _ => Err(invalid("unknown verb")),
        }
    }
}

impl fmt::Display for CartCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Add { id, quantity } if quantity.get() == 1 => write!(f, "add:{id}"),
            Self::Add { id, quantity } => write!(f, "add:{id}:{quantity}"),
            Self::Remove(id) => write!(f, "remove:{id}"),
            Self::Increment(id) => write!(f, "inc:{id}"),
            Self::Decrement(id) => write!(f, "dec:{id}"),
            Self::Clear => f.write_str("clear"),
        }
    }
}

/// A shopping session: one cart priced against one catalog.
#[derive(Debug)]
pub struct Session<'c> {
    catalog: &'c Catalog,
    cart: Cart,
}

impl<'c> Session<'c> {
    /// Start a session with an empty cart.
    pub fn new(catalog: &'c Catalog) -> Self {
        Self {
            catalog,
            cart: Cart::new(),
        }
    }

    /// Apply one command.
    ///
    /// # Errors
    ///
    /// Returns the [`CartError`] raised by the cart.
    pub fn apply(&mut self, command: &CartCommand) -> Result<(), CartError> {
        command.apply(&mut self.cart, self.catalog)
    }

    /// Apply commands in order, logging and skipping any the cart rejects.
    ///
    /// Returns the number of rejected commands.
    pub fn run<'a>(&mut self, commands: impl IntoIterator<Item = &'a CartCommand>) -> usize {
        let mut rejected = 0;

        for command in commands {
            if let Err(err) = self.apply(command) {
                warn!(%command, error = %err, "cart rejected command");
                rejected += 1;
            }
        }

        rejected
    }

    /// The session's cart.
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// The catalog the session prices against.
    pub fn catalog(&self) -> &'c Catalog {
        self.catalog
    }

    /// Snapshot the cart without changing it.
    ///
    /// # Errors
    ///
    /// See [`Cart::receipt`].
    pub fn receipt(&self) -> Result<Receipt, CartError> {
        self.cart.receipt(self.catalog)
    }

    /// Check out the cart.
    ///
    /// # Errors
    ///
    /// See [`Cart::checkout`].
    pub fn checkout(&mut self) -> Result<Receipt, CartError> {
        self.cart.checkout(self.catalog)
    }
}
