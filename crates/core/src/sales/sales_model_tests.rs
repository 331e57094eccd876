//! Tests for sales domain models, mostly the line-total rule.

#[cfg(test)]
mod tests {
    use crate::sales::{NewBuyer, NewSaleItem};
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn item(quantity: Option<Decimal>, price: Option<Decimal>) -> NewSaleItem {
        NewSaleItem {
            id: None,
            product_id: "prod-1".to_string(),
            buyer_id: None,
            quantity,
            price,
        }
    }

    #[test]
    fn test_line_total_multiplies_factors() {
        assert_eq!(item(Some(dec!(2)), Some(dec!(100))).line_total(), dec!(200));
        assert_eq!(item(Some(dec!(1)), Some(dec!(50))).line_total(), dec!(50));
        assert_eq!(
            item(Some(dec!(2.5)), Some(dec!(10.40))).line_total(),
            dec!(26.000)
        );
    }

    #[test]
    fn test_line_total_zero_when_quantity_absent() {
        assert_eq!(item(None, Some(dec!(100))).line_total(), Decimal::ZERO);
    }

    #[test]
    fn test_line_total_zero_when_price_absent() {
        assert_eq!(item(Some(dec!(2)), None).line_total(), Decimal::ZERO);
    }

    #[test]
    fn test_line_total_zero_when_both_absent() {
        assert_eq!(item(None, None).line_total(), Decimal::ZERO);
    }

    #[test]
    fn test_sale_item_requires_product() {
        let mut invalid = item(Some(dec!(1)), Some(dec!(1)));
        invalid.product_id = String::new();
        assert!(invalid.validate().is_err());
    }

    #[test]
    fn test_buyer_requires_name() {
        let buyer = NewBuyer {
            id: None,
            name: " ".to_string(),
            sign: None,
            phone_number: None,
        };
        assert!(buyer.validate().is_err());
    }
}
