//! Benchmarks for click-to-token resolution
//!
//! Run with: cargo bench --bench resolve

use tokenbridge::resolve::find_nearest_literal_token;
use tokenbridge::{
    token_middleware, EditorEvent, Middleware, Modifiers, Pos, Side, TextEditor, TokenBuffer,
};

#[global_allocator]
static ALLOC: divan::AllocProfiler = divan::AllocProfiler::system();

fn main() {
    divan::main();
}

const LINE: &str =
    r#"const config = { name: "sample", retries: 3, verbose: false, ratio: 0.75 };"#;

fn make_buffer(lines: usize) -> TokenBuffer {
    let text = format!("{}\n", LINE).repeat(lines);
    TokenBuffer::new(&text)
}

#[divan::bench(args = [10, 1000, 10000])]
fn token_at_last_line(bencher: divan::Bencher, lines: usize) {
    let buffer = make_buffer(lines);
    let pos = Pos::new(lines - 1, 40);
    bencher.bench(|| buffer.token_at(divan::black_box(pos), false));
}

#[divan::bench]
fn resolve_left_boundary(bencher: divan::Bencher) {
    let buffer = make_buffer(100);
    // Left edge of `3`: retried at the next character
    let pos = Pos::with_side(50, 42, Side::Left);
    bencher.bench(|| find_nearest_literal_token(&buffer, divan::black_box(pos)));
}

#[divan::bench]
fn modifier_click_round_trip(bencher: divan::Bencher) {
    let buffer = make_buffer(100);
    let mut middleware = token_middleware(|action| {
        divan::black_box(action);
    });
    middleware.attach(Some(&tokenbridge::DocumentId::new("bench")));

    bencher.bench_local(|| {
        let mut event = EditorEvent::mouse_down(427.0, 1010.0, Modifiers::ALT);
        middleware.handle_event(&buffer, &mut event);
        event
    });
}
