//! Static storefront catalogue. Products are not persisted.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductCategory {
    Fruits,
    Dairy,
    Grains,
    Snacks,
}

impl ProductCategory {
    pub fn code(&self) -> &'static str {
        match self {
            ProductCategory::Fruits => "fruits",
            ProductCategory::Dairy => "dairy",
            ProductCategory::Grains => "grains",
            ProductCategory::Snacks => "snacks",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ProductCategory::Fruits => "Fruits",
            ProductCategory::Dairy => "Dairy",
            ProductCategory::Grains => "Grains",
            ProductCategory::Snacks => "Snacks",
        }
    }

    pub fn all() -> Vec<ProductCategory> {
        vec![
            ProductCategory::Fruits,
            ProductCategory::Dairy,
            ProductCategory::Grains,
            ProductCategory::Snacks,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::all().into_iter().find(|c| c.code() == code)
    }
}

/// Category buttons above the product grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(ProductCategory),
}

impl CategoryFilter {
    pub fn code(&self) -> &'static str {
        match self {
            CategoryFilter::All => "all",
            CategoryFilter::Only(category) => category.code(),
        }
    }

    pub fn from_code(code: &str) -> Self {
        ProductCategory::from_code(code)
            .map(CategoryFilter::Only)
            .unwrap_or(CategoryFilter::All)
    }

    pub fn accepts(&self, category: ProductCategory) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(only) => *only == category,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: &'static str,
    pub name: &'static str,
    pub category: ProductCategory,
    pub price: f64,
    pub description: &'static str,
}

impl Product {
    /// Body of the "Learn more" dialog.
    pub fn detail_text(&self) -> String {
        format!(
            "More detailed information about {} (ID: {}). {}",
            self.name, self.id, self.description
        )
    }

    pub fn price_label(&self) -> String {
        format!("${:.2}", self.price)
    }
}

static CATALOGUE: [Product; 7] = [
    Product {
        id: "prod001",
        name: "Fresh Apples (Kg)",
        category: ProductCategory::Fruits,
        price: 2.99,
        description: "Crisp and juicy apples from local orchards.",
    },
    Product {
        id: "prod002",
        name: "Fresh Milk (1L)",
        category: ProductCategory::Dairy,
        price: 1.50,
        description: "Pasteurised whole milk, delivered chilled.",
    },
    Product {
        id: "prod003",
        name: "Basmati Rice (1kg)",
        category: ProductCategory::Grains,
        price: 4.50,
        description: "Long-grain aromatic rice.",
    },
    Product {
        id: "prod004",
        name: "Ripe Bananas (Bunch)",
        category: ProductCategory::Fruits,
        price: 1.99,
        description: "Sweet bananas, ready to eat.",
    },
    Product {
        id: "prod005",
        name: "Natural Yogurt (500g)",
        category: ProductCategory::Dairy,
        price: 2.25,
        description: "Plain set yogurt with live cultures.",
    },
    Product {
        id: "prod006",
        name: "Rolled Oats (1kg)",
        category: ProductCategory::Grains,
        price: 3.20,
        description: "Whole grain oats for porridge and baking.",
    },
    Product {
        id: "prod007",
        name: "Potato Chips (150g)",
        category: ProductCategory::Snacks,
        price: 1.80,
        description: "Lightly salted crunchy potato chips.",
    },
];

pub fn catalogue() -> &'static [Product] {
    &CATALOGUE
}

pub fn find_product(id: &str) -> Option<&'static Product> {
    CATALOGUE.iter().find(|p| p.id == id)
}

/// Products visible under `filter`, in catalogue order.
pub fn visible_products(filter: CategoryFilter) -> Vec<&'static Product> {
    CATALOGUE.iter().filter(|p| filter.accepts(p.category)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_filter() {
        let dairy = visible_products(CategoryFilter::from_code("dairy"));
        let ids: Vec<&str> = dairy.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec!["prod002", "prod005"]);
        assert_eq!(visible_products(CategoryFilter::from_code("all")).len(), 7);
        assert_eq!(CategoryFilter::from_code("toys"), CategoryFilter::All);
    }

    #[test]
    fn test_detail_text() {
        let chips = find_product("prod007").unwrap();
        assert_eq!(
            chips.detail_text(),
            "More detailed information about Potato Chips (150g) (ID: prod007). Lightly salted crunchy potato chips."
        );
        assert_eq!(chips.price_label(), "$1.80");
        assert!(find_product("prod999").is_none());
    }
}
