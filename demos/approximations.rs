//! Print successive approximations of square roots, stepping through them by hand.

use lazyseq::Seq;

use tracing_subscriber::EnvFilter;

const EPS: f64 = 1e-12;

fn babylon<'a>(x: f64) -> Seq<'a, f64> {
    Seq::iterate(1.0, move |guess: &f64| (guess + x / guess) / 2.0)
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    for x in [2.0, 10.0, 1234.5] {
        let guesses = babylon(x);
        let deltas = guesses
            .zip(&guesses.skip(1))
            .map_indexed(|(a, b), step| (step + 1, b, (a - b).abs()));

        let mut cursor = deltas.to_generator().cursor();
        while let Some((step, guess, delta)) = cursor.pull() {
            println!("sqrt({x}) step {step}: {guess}");
            if delta < EPS {
                break;
            }
        }
    }
}
