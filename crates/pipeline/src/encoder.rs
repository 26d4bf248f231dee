//! Feature encoding for recipe scoring.
//!
//! This module turns the fetched catalog into the numeric matrix the
//! model consumes: one row per recipe, one column per product, cell
//! set to 1.0 when the product name appears in the recipe's
//! ingredient list.

use catalog::{Product, Recipe};
use ndarray::Array2;
use rayon::prelude::*;
use std::collections::HashSet;
use tracing::debug;

/// Encode the ingredient-presence matrix for `recipes` over `products`.
///
/// # Arguments
/// * `products` - The user's available products (matrix columns)
/// * `recipes` - The recipe catalog (matrix rows)
///
/// # Returns
/// An `Array2<f32>` of shape `(recipes.len(), products.len())`, rows in
/// input recipe order. Membership is exact-name: "milk" does not match
/// an ingredient "coconut milk". Empty inputs yield a degenerate matrix
/// with a zero dimension.
pub fn encode_presence_matrix(products: &[Product], recipes: &[Recipe]) -> Array2<f32> {
    let rows: Vec<Vec<f32>> = recipes
        .par_iter()
        .map(|recipe| encode_row(products, recipe))
        .collect();

    debug!(
        recipes = recipes.len(),
        products = products.len(),
        "Encoded presence matrix"
    );

    let flat: Vec<f32> = rows.into_iter().flatten().collect();
    // Each row has exactly products.len() cells, so the shape always holds.
    Array2::from_shape_vec((recipes.len(), products.len()), flat)
        .expect("presence rows match product count")
}

/// Encode a single recipe row.
fn encode_row(products: &[Product], recipe: &Recipe) -> Vec<f32> {
    let ingredients: HashSet<&str> = recipe.ingredient_list().into_iter().collect();

    products
        .iter()
        .map(|product| {
            if ingredients.contains(product.name.as_str()) {
                1.0
            } else {
                0.0
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(name: &str) -> Product {
        Product {
            name: name.to_string(),
        }
    }

    fn recipe(id: u64, ingredients: &str) -> Recipe {
        Recipe {
            id,
            name: format!("Recipe {}", id),
            ingredients: ingredients.to_string(),
        }
    }

    #[test]
    fn test_row_has_one_per_matching_product() {
        let products = vec![product("flour"), product("milk"), product("eggs")];
        let recipes = vec![recipe(1, "flour, eggs")];

        let matrix = encode_presence_matrix(&products, &recipes);

        assert_eq!(matrix.shape(), &[1, 3]);
        assert_eq!(matrix[[0, 0]], 1.0);
        assert_eq!(matrix[[0, 1]], 0.0);
        assert_eq!(matrix[[0, 2]], 1.0);
        assert_eq!(matrix.row(0).sum(), 2.0);
    }

    #[test]
    fn test_presence_is_order_independent() {
        let recipes = vec![recipe(1, "milk, flour")];

        let forward = encode_presence_matrix(&[product("flour"), product("milk")], &recipes);
        let reversed = encode_presence_matrix(&[product("milk"), product("flour")], &recipes);

        // Same memberships, columns just swap with the product order.
        assert_eq!(forward.row(0).sum(), 2.0);
        assert_eq!(reversed.row(0).sum(), 2.0);
        assert_eq!(forward[[0, 0]], reversed[[0, 1]]);
        assert_eq!(forward[[0, 1]], reversed[[0, 0]]);
    }

    #[test]
    fn test_membership_is_exact_name_match() {
        let products = vec![product("milk")];
        let recipes = vec![recipe(1, "coconut milk, sugar")];

        let matrix = encode_presence_matrix(&products, &recipes);

        assert_eq!(matrix[[0, 0]], 0.0, "Substring of an ingredient must not match");
    }

    #[test]
    fn test_rows_follow_recipe_order() {
        let products = vec![product("flour"), product("milk")];
        let recipes = vec![recipe(10, "flour"), recipe(20, "milk"), recipe(30, "flour, milk")];

        let matrix = encode_presence_matrix(&products, &recipes);

        assert_eq!(matrix.shape(), &[3, 2]);
        assert_eq!(matrix.row(0).to_vec(), vec![1.0, 0.0]);
        assert_eq!(matrix.row(1).to_vec(), vec![0.0, 1.0]);
        assert_eq!(matrix.row(2).to_vec(), vec![1.0, 1.0]);
    }

    #[test]
    fn test_empty_inputs_yield_degenerate_matrix() {
        let matrix = encode_presence_matrix(&[], &[recipe(1, "flour")]);
        assert_eq!(matrix.shape(), &[1, 0]);

        let matrix = encode_presence_matrix(&[product("flour")], &[]);
        assert_eq!(matrix.shape(), &[0, 1]);

        let matrix = encode_presence_matrix(&[], &[]);
        assert_eq!(matrix.shape(), &[0, 0]);
    }
}
