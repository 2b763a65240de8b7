/// A stored payment instrument that knows how to pay with itself.
pub trait PaymentMethod: Send + Sync {
    fn pay(&self) -> String;

    /// Identifier shown when a payment is made; card number or UPI id.
    fn card_number(&self) -> &str;
}

pub type PaymentMethodBox = Box<dyn PaymentMethod>;

/// Card details shared by every card-based payment method.
#[derive(Debug, Clone, PartialEq)]
pub struct PaymentCard {
    card_number: String,
    card_holder_name: String,
}

impl PaymentCard {
    pub fn new(card_number: impl Into<String>, card_holder_name: impl Into<String>) -> Self {
        Self {
            card_number: card_number.into(),
            card_holder_name: card_holder_name.into(),
        }
    }

    pub fn card_number(&self) -> &str {
        &self.card_number
    }

    pub fn card_holder_name(&self) -> &str {
        &self.card_holder_name
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CreditCard(PaymentCard);

impl CreditCard {
    pub fn new(card_number: impl Into<String>, card_holder_name: impl Into<String>) -> Self {
        Self(PaymentCard::new(card_number, card_holder_name))
    }

    pub fn card(&self) -> &PaymentCard {
        &self.0
    }
}

impl PaymentMethod for CreditCard {
    fn pay(&self) -> String {
        "Making a payment with a credit card".to_string()
    }

    fn card_number(&self) -> &str {
        self.0.card_number()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DebitCard(PaymentCard);

impl DebitCard {
    pub fn new(card_number: impl Into<String>, card_holder_name: impl Into<String>) -> Self {
        Self(PaymentCard::new(card_number, card_holder_name))
    }

    pub fn card(&self) -> &PaymentCard {
        &self.0
    }
}

impl PaymentMethod for DebitCard {
    fn pay(&self) -> String {
        "Making a payment with a debit card".to_string()
    }

    fn card_number(&self) -> &str {
        self.0.card_number()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Upi {
    upi_id: String,
}

impl Upi {
    pub fn new(upi_id: impl Into<String>) -> Self {
        Self {
            upi_id: upi_id.into(),
        }
    }
}

impl PaymentMethod for Upi {
    fn pay(&self) -> String {
        format!("Making a payment with UPI. UpiId: {}", self.upi_id)
    }

    fn card_number(&self) -> &str {
        &self.upi_id
    }
}
