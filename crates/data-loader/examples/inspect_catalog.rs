use data_loader::{AnimeCatalog, Encoding, EpisodeRange};
use std::path::Path;
use std::time::Instant;

fn main() {
    let path = Path::new("anime_data.csv");

    println!("Loading anime dataset...\n");

    let start = Instant::now();
    let catalog = AnimeCatalog::load_from_file(path, Encoding::Latin1)
        .expect("Failed to load dataset");
    let elapsed = start.elapsed();

    println!("=== Load Complete ===");
    println!("Time taken: {:?}", elapsed);
    println!("Titles: {}", catalog.len());
    println!("Genres: {}", catalog.unique_genres().len());

    println!("\nTitles per genre:");
    for genre in catalog.unique_genres() {
        let ranges = catalog.episode_ranges_for(genre);
        let available: Vec<&str> = EpisodeRange::ALL
            .into_iter()
            .filter(|r| ranges.contains(r))
            .map(EpisodeRange::label)
            .collect();
        println!(
            "  {:<16} {:>4}  [{}]",
            genre,
            catalog.filter_by_genre(genre).len(),
            available.join(", ")
        );
    }
}
