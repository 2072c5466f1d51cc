// The main crate is wasm-only, so host tests include the pure globe modules directly.
#![allow(dead_code)]

pub mod globe {
    pub mod constants {
        include!("../../src/globe/constants.rs");
    }
    pub mod config {
        include!("../../src/globe/config.rs");
    }
    pub mod sphere {
        include!("../../src/globe/sphere.rs");
    }
    pub mod rotation {
        include!("../../src/globe/rotation.rs");
    }
    pub mod drag {
        include!("../../src/globe/drag.rs");
    }
    pub mod projector {
        include!("../../src/globe/projector.rs");
    }
    pub mod state {
        include!("../../src/globe/state.rs");
    }
}

pub fn approx(a: f32, b: f32, eps: f32) -> bool {
    (a - b).abs() <= eps
}
