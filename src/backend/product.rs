/// A catalog entry. `id` never changes once stored; `name` and `price` may be absent.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub(crate) id: i64,
    pub name: Option<String>,
    pub price: Option<f64>,
}

/// Replacement values applied by [`crate::Store::update`]. Absent fields clear the product's field.
#[derive(Debug, Clone, Default)]
pub struct ProductPatch {
    pub name: Option<String>,
    pub price: Option<f64>,
}

impl Product {
    pub fn new(id: i64, name: impl Into<String>, price: f64) -> Self {
        Product {
            id,
            name: Some(name.into()),
            price: Some(price),
        }
    }

    pub fn with_fields(id: i64, name: Option<String>, price: Option<f64>) -> Self {
        Product { id, name, price }
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn is_complete(&self) -> bool {
        self.name.is_some() && self.price.is_some()
    }

    pub(crate) fn apply(&mut self, patch: &ProductPatch) {
        self.name.clone_from(&patch.name);
        self.price = patch.price;
    }
}

impl ProductPatch {
    pub fn new(name: Option<String>, price: Option<f64>) -> Self {
        ProductPatch { name, price }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_complete() {
        assert!(Product::new(1, "A", 10.0).is_complete());
        assert!(!Product::with_fields(2, None, Some(20.0)).is_complete());
        assert!(!Product::with_fields(3, Some("C".to_string()), None).is_complete());
    }

    #[test]
    fn test_apply_overwrites_both_fields() {
        let mut p = Product::new(4, "old", 1.0);
        p.apply(&ProductPatch::new(None, Some(2.5)));
        assert_eq!(p, Product::with_fields(4, None, Some(2.5)));
    }
}
