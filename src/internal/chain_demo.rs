#![allow(clippy::missing_docs_in_private_items)]
#![allow(clippy::arithmetic_side_effects)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::indexing_slicing)]
#![allow(clippy::pedantic)]
#![allow(warnings)]

use chainmap::ChainedHashMap;
use plotters::prelude::*;
use rand::Rng;

// Bucket count for the chain-length experiment
const BUCKET_COUNT: usize = 1024;
// Load factors from 0.1 to 0.95 with 10 steps
const NUM_LOAD_FACTORS: usize = 10;
// Length of the generated random keys
const KEY_LEN: usize = 12;

// DJB2, the hash the table uses, restated for the simulation
fn djb2(key: &str) -> u32 {
    key.chars().fold(5381_u32, |hash, c| hash.wrapping_mul(33).wrapping_add(c as u32))
}

// Chain length statistics for `keys` hashed into `buckets` slots:
// average over occupied buckets, and the longest chain.
fn chain_stats(keys: &[String], buckets: usize) -> (f64, f64) {
    let mut counts = vec![0_usize; buckets];
    for key in keys {
        counts[djb2(key) as usize % buckets] += 1;
    }

    let occupied = counts.iter().filter(|&&c| c > 0).count();
    let worst = counts.iter().copied().max().unwrap_or(0);
    let avg = if occupied == 0 { 0.0 } else { keys.len() as f64 / occupied as f64 };
    (avg, worst as f64)
}

// Feed a two-bucket table beyond capacity, then double it.
fn walkthrough() {
    let mut table = match ChainedHashMap::with_capacity(2) {
        Ok(table) => table,
        Err(err) => {
            eprintln!("{err}");
            return;
        }
    };

    table.insert("line_1".to_string(), "Tiny hash table");
    table.insert("line_2".to_string(), "Filled beyond capacity");
    table.insert("line_3".to_string(), "Linked list saves the day!");

    // Retrieve beyond capacity: three entries share two buckets
    println!();
    for key in ["line_1", "line_2", "line_3"] {
        if let Some(value) = table.get(key) {
            println!("{value}");
        }
    }

    let old_capacity = table.capacity();
    table.resize();
    let new_capacity = table.capacity();

    println!("\nResized from {old_capacity} to {new_capacity}.\n");

    // Data intact after resizing
    for key in ["line_1", "line_2", "line_3"] {
        if let Some(value) = table.get(key) {
            println!("{value}");
        }
    }

    // The library reports a missing key as a value; the warning is ours
    if table.remove("line_4").is_none() {
        println!("\nThe key was not found.");
    }

    println!();
}

fn chain_length_simulation() -> Result<(), Box<dyn std::error::Error>> {
    // Generate load factors from 0.1 to 0.95
    let load_factors: Vec<f64> = (0..NUM_LOAD_FACTORS)
        .map(|i| 0.1 + (0.95 - 0.1) * (i as f64) / ((NUM_LOAD_FACTORS - 1) as f64))
        .collect();

    // Generate random keys outside the loop so every load factor sees the
    // same prefix of the key stream
    let mut rng = rand::rng();
    let max_keys = (BUCKET_COUNT as f64 * 0.95) as usize;
    let keys: Vec<String> = (0..max_keys)
        .map(|_| (0..KEY_LEN).map(|_| rng.random_range('a'..='z')).collect())
        .collect();

    let mut avg_before: Vec<f64> = Vec::new();
    let mut worst_before: Vec<f64> = Vec::new();
    let mut avg_after: Vec<f64> = Vec::new();
    let mut worst_after: Vec<f64> = Vec::new();

    for &load in &load_factors {
        let n_keys = (BUCKET_COUNT as f64 * load) as usize;

        let (avg_b, worst_b) = chain_stats(&keys[..n_keys], BUCKET_COUNT);
        // One doubling, the growth step this table leaves to its caller
        let (avg_a, worst_a) = chain_stats(&keys[..n_keys], BUCKET_COUNT * 2);

        println!(
            "load {load:.2}: avg chain {avg_b:.2} -> {avg_a:.2}, worst chain {worst_b:.0} -> {worst_a:.0}"
        );

        avg_before.push(avg_b);
        worst_before.push(worst_b);
        avg_after.push(avg_a);
        worst_after.push(worst_a);
    }

    let font_family = "sans-serif";
    let line_width = 2;
    let marker_size = 4;
    let text_size = 16;
    let title_size = 35;

    let root = BitMapBackend::new("chain_lengths.png", (1200, 800)).into_drawing_area();
    root.fill(&WHITE)?;

    let max_y = worst_before.iter().copied().fold(0.0_f64, f64::max) * 1.1;

    let mut chart = ChartBuilder::on(&root)
        .caption("Chain Length vs Load Factor", (font_family, title_size))
        .margin(15)
        .x_label_area_size(60)
        .y_label_area_size(60)
        .right_y_label_area_size(10)
        .build_cartesian_2d(0.0..1.0_f64, 0.0..max_y)?;

    chart
        .configure_mesh()
        .x_desc("Load Factor (entries per bucket)")
        .y_desc("Chain Length")
        .axis_desc_style((font_family, text_size))
        .draw()?;

    let series = [
        ("Average chain", &avg_before, RGBColor(50, 90, 220)),
        ("Worst chain", &worst_before, RGBColor(220, 50, 50)),
        ("Average chain after doubling", &avg_after, RGBColor(50, 180, 50)),
        ("Worst chain after doubling", &worst_after, RGBColor(180, 50, 180)),
    ];

    for (name, values, color) in series {
        let line_style = ShapeStyle::from(&color).stroke_width(line_width);

        chart
            .draw_series(LineSeries::new(
                load_factors.iter().copied().zip(values.iter().copied()),
                line_style,
            ))?
            .label(name)
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], line_style));

        chart.draw_series(
            load_factors
                .iter()
                .copied()
                .zip(values.iter().copied())
                .map(|(x, y)| Circle::new((x, y), marker_size, color.filled())),
        )?;
    }

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .position(SeriesLabelPosition::UpperLeft)
        .draw()?;

    println!("Generated plot image: chain_lengths.png");

    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    walkthrough();
    chain_length_simulation()?;
    Ok(())
}
