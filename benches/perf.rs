use std::fs;
use std::hint::black_box;
use std::path::PathBuf;

use criterion::{Criterion, criterion_group, criterion_main};

use boxstats::document::BoxscoreDocument;
use boxstats::extract::{RowFilter, extract_all};
use boxstats::game_id::GameId;

fn fixture_html() -> String {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("tests");
    path.push("fixtures");
    path.push("boxscore.html");
    fs::read_to_string(path).expect("fixture file should be readable")
}

fn bench_document_parse(c: &mut Criterion) {
    let raw = fixture_html();
    c.bench_function("document_parse", |b| {
        b.iter(|| {
            let doc = BoxscoreDocument::from_html(black_box(&raw));
            black_box(doc.find_table("player_offense").is_some());
        })
    });
}

fn bench_extract_all(c: &mut Criterion) {
    let raw = fixture_html();
    let doc = BoxscoreDocument::from_html(&raw);
    let game_id = GameId::parse("202411030buf").expect("valid fixture id");
    let filter = RowFilter::default();
    c.bench_function("extract_all", |b| {
        b.iter(|| {
            let game = extract_all(black_box(&doc), &game_id, &filter);
            black_box(game.player_row_count());
        })
    });
}

criterion_group!(benches, bench_document_parse, bench_extract_all);
criterion_main!(benches);
