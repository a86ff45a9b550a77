//! Form encoding of create attributes.
//!
//! WebPay takes nested parameters in bracket notation (`card[number]`), which
//! `serde_urlencoded` cannot derive, so the pairs are listed by hand.

use webpay_core::{CreateCharge, CreateCustomer, CreateToken};

pub(crate) type FormParams = Vec<(&'static str, String)>;

pub(crate) fn token_params(attributes: &CreateToken) -> FormParams {
    let card = &attributes.card;
    vec![
        ("card[number]", card.number.clone()),
        ("card[exp_month]", card.exp_month.to_string()),
        ("card[exp_year]", card.exp_year.to_string()),
        ("card[cvc]", card.cvc.clone()),
        ("card[name]", card.name.clone()),
    ]
}

pub(crate) fn charge_params(attributes: &CreateCharge) -> FormParams {
    vec![
        ("amount", attributes.amount.to_string()),
        ("currency", attributes.currency.as_str().to_string()),
        ("card", attributes.card.clone()),
        ("description", attributes.description.clone()),
    ]
}

pub(crate) fn customer_params(attributes: &CreateCustomer) -> FormParams {
    vec![
        ("card", attributes.card.clone()),
        ("description", attributes.description.clone()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use webpay_core::CardInput;

    #[test]
    fn token_params_use_bracket_keys() {
        let params = token_params(&CreateToken {
            card: CardInput::new("4242-4242-4242-4242", 8, 2029, "123", "M O"),
        });

        assert_eq!(params[0], ("card[number]", "4242-4242-4242-4242".to_string()));
        assert_eq!(params[1], ("card[exp_month]", "8".to_string()));
        assert_eq!(params[2], ("card[exp_year]", "2029".to_string()));
        assert_eq!(params[3], ("card[cvc]", "123".to_string()));
        assert_eq!(params[4], ("card[name]", "M O".to_string()));
    }

    #[test]
    fn charge_params_include_empty_description() {
        let params = charge_params(&CreateCharge::jpy("tok_abc", 200));
        assert_eq!(
            params,
            vec![
                ("amount", "200".to_string()),
                ("currency", "jpy".to_string()),
                ("card", "tok_abc".to_string()),
                ("description", String::new()),
            ]
        );
    }
}
