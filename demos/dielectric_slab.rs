use em_waves::config::{RegionSpec, SampleRange, SolveConfig};

fn main() {
    // Air | 2 mm slab of εr = 6 | air, at 50 GHz — the classic
    // wave-through-a-dielectric demo, printed as CSV for plotting.
    let config = SolveConfig {
        frequency_hz: 50.0e9,
        regions: vec![
            RegionSpec::boundary(1.0, 0.0),
            RegionSpec::slab(6.0, 1.0e-12, 2.0),
            RegionSpec::boundary(1.0, 0.0),
        ],
        sample_range: SampleRange {
            start_m: -0.01,
            stop_m: 0.03,
            samples: 2000,
        },
    };

    let field = config.run().expect("valid configuration");

    println!("x_mm, re_e, mag_e");
    for sample in &field {
        println!(
            "{:.6e}, {:.6e}, {:.6e}",
            sample.position * 1.0e3,
            sample.real(),
            sample.magnitude()
        );
    }
}
