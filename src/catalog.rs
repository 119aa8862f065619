//! Static candidate catalog and the sampling that fills the grid before the
//! user has typed a query.

use once_cell::sync::Lazy;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::models::Movie;

/// Tiles shown per sampled block.
const BLOCK: usize = 50;
/// Number of block-aligned starting offsets the sampler picks from.
const BLOCKS: u32 = 5;

static TOP_250: Lazy<Vec<Movie>> = Lazy::new(|| {
    serde_json::from_str(include_str!("../assets/top250.json"))
        .expect("embedded catalog is valid JSON")
});

/// The bundled top-250 catalog used for pre-query display content.
pub fn top_catalog() -> &'static [Movie] {
    &TOP_250
}

/// Uniform integer in `[min, max]` inclusive. Also used by the shell to vary
/// spinner-animation durations.
pub fn random_number<R: Rng + ?Sized>(rng: &mut R, min: u32, max: u32) -> u32 {
    rng.gen_range(min..=max)
}

/// The 50-tile block starting at `offset`, clipped to the catalog bounds.
fn block_at(catalog: &[Movie], offset: usize) -> &[Movie] {
    let start = offset.min(catalog.len());
    let end = (offset + BLOCK).min(catalog.len());
    &catalog[start..end]
}

/// Picks the initial result grid: a random block-of-50 from the catalog,
/// returned in shuffled order. Offsets are aligned to blocks, so a catalog
/// shorter than `offset + 50` yields a short (possibly empty) grid.
pub fn first_results<R: Rng + ?Sized>(catalog: &[Movie], rng: &mut R) -> Vec<Movie> {
    let offset = random_number(rng, 0, BLOCKS - 1) as usize * BLOCK;
    let mut tiles = block_at(catalog, offset).to_vec();
    tiles.shuffle(rng);
    tiles
}

/// Produces 1–5 empty placeholder records, the shape a search result grid
/// has before any real data arrives. Leftover scaffolding from the search
/// screen; nothing in the search flow calls it.
pub fn simulate_search<R: Rng + ?Sized>(rng: &mut R) -> Vec<Movie> {
    let amount = random_number(rng, 1, 5);
    (0..amount).map(|_| Movie::default()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn movies(n: usize) -> Vec<Movie> {
        (0..n)
            .map(|i| Movie {
                title: format!("Movie {i}"),
                year: "2000".into(),
                imdb_id: format!("tt{i:07}"),
                media_type: "movie".into(),
                poster: "N/A".into(),
            })
            .collect()
    }

    fn sorted_ids(movies: &[Movie]) -> Vec<&str> {
        let mut ids: Vec<&str> = movies.iter().map(|m| m.imdb_id.as_str()).collect();
        ids.sort_unstable();
        ids
    }

    #[test]
    fn random_number_stays_in_bounds() {
        let mut rng = rand::thread_rng();
        for _ in 0..10_000 {
            let v = random_number(&mut rng, 3, 17);
            assert!((3..=17).contains(&v), "out of range: {v}");
        }
        assert_eq!(random_number(&mut rng, 5, 5), 5);
    }

    #[test]
    fn block_lengths_are_clipped_to_source_bounds() {
        for len in [0usize, 30, 50, 120, 230, 250] {
            let catalog = movies(len);
            for offset in [0usize, 50, 100, 150, 200] {
                let expected = BLOCK.min(len.saturating_sub(offset));
                assert_eq!(
                    block_at(&catalog, offset).len(),
                    expected,
                    "len {len}, offset {offset}"
                );
            }
        }
    }

    #[test]
    fn first_results_is_permutation_of_one_aligned_block() {
        let catalog = movies(230);
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let sampled = first_results(&catalog, &mut rng);
            let matches_some_block = (0..5).any(|block| {
                sorted_ids(block_at(&catalog, block * BLOCK)) == sorted_ids(&sampled)
            });
            assert!(matches_some_block, "sample is not a 50-aligned block");
        }
    }

    #[test]
    fn first_results_on_short_catalog_can_be_empty() {
        let catalog = movies(40);
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..50 {
            let sampled = first_results(&catalog, &mut rng);
            assert!(sampled.len() == 40 || sampled.is_empty());
        }
    }

    #[test]
    fn simulate_search_yields_one_to_five_blank_records() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..100 {
            let placeholders = simulate_search(&mut rng);
            assert!((1..=5).contains(&placeholders.len()));
            assert!(placeholders.iter().all(|m| m.title.is_empty()));
        }
    }

    #[test]
    fn bundled_catalog_decodes_and_is_grid_sized() {
        let catalog = top_catalog();
        assert_eq!(catalog.len(), 250);
        assert!(catalog.iter().all(|m| m.imdb_id.starts_with("tt")));
        assert!(catalog.iter().any(|m| !m.has_poster()));
    }
}
