//! Fixture table for the PPU sprite-zero-hit conformance suite.
//!
//! Order is significant: it is the execution and report order of the suite.
//! Digests identify the exact expected bytes of each referenced file;
//! loading verifies them before a file is trusted as input or reference.

use crate::types::{CaseMeta, FileRef};

/// Suite identifier, matching the fixture directory layout.
pub const SUITE: &str = "ppu/sprite_hit_tests";

pub(crate) static CASES: &[CaseMeta] = &[
    CaseMeta {
        name: "basics",
        rom: FileRef {
            name: "01.basics.nes",
            sha256: "51819e8e502bd88fe3b7244198a074dbeef2e848f66c587be04b04f1f0d4bb52",
        },
        golden: Some(FileRef {
            name: "01.bin",
            sha256: "83d15be3a3ae1d718872921e2135c7db1034059ae803aaa0fdc0ad075f233b55",
        }),
        result: Some("33"),
    },
    CaseMeta {
        name: "alignment",
        rom: FileRef {
            name: "02.alignment.nes",
            sha256: "125bbb3ce1e67370f1f4559c2ad3221e52a3e98880b9789400292b5f3a8b39e6",
        },
        golden: Some(FileRef {
            name: "02.bin",
            sha256: "57dc5946584144ceb4cc00f64bd5acdae204307bd025c3cb80954410c9e9f1de",
        }),
        result: Some("31"),
    },
    CaseMeta {
        name: "corners",
        rom: FileRef {
            name: "03.corners.nes",
            sha256: "9dd57776bc6267fe6183c5521d67cbe3fccc6662ae545eb2c419949bf39644d3",
        },
        golden: Some(FileRef {
            name: "03.bin",
            sha256: "bd7519add80c0f7d1989c6ca5d6f0945f1a51c3506c45a7c717e2e1a0cddb82a",
        }),
        result: Some("20"),
    },
    CaseMeta {
        name: "flip",
        rom: FileRef {
            name: "04.flip.nes",
            sha256: "5f7142bddb51b7577f93fa22f9f668efebbeea00346d7255089e1863acb9d46a",
        },
        golden: Some(FileRef {
            name: "04.bin",
            sha256: "46d848fdcb3bdca3172ffd1ab274a736af380531d4429dde9fa6e09265036bb0",
        }),
        result: Some("18"),
    },
    CaseMeta {
        name: "left_clip",
        rom: FileRef {
            name: "05.left_clip.nes",
            sha256: "69b329658c17b953f149c2f0de77eb272089df22c815bd2fd3d6f43206791c13",
        },
        golden: Some(FileRef {
            name: "05.bin",
            sha256: "ecfa9b624d3eb50dd46e943202a86465353f2a771a1b53b9ae43431018f6cf60",
        }),
        result: Some("29"),
    },
    CaseMeta {
        name: "right_edge",
        rom: FileRef {
            name: "06.right_edge.nes",
            sha256: "8e6653fcb869e06873e29e5e4423122ea72ba0bf38f3ba9e39f471420db759a4",
        },
        golden: None,
        result: None,
    },
    CaseMeta {
        name: "screen_bottom",
        rom: FileRef {
            name: "07.screen_bottom.nes",
            sha256: "05849956f80267838c5b6556310266b794078a4300841cbb36339fd141905a0b",
        },
        golden: None,
        result: None,
    },
    CaseMeta {
        name: "double_height",
        rom: FileRef {
            name: "08.double_height.nes",
            sha256: "127fd966b6b32d6d88a53c5f59d7e938827783c9ad056091f119be1c4ab21c71",
        },
        golden: None,
        result: None,
    },
    CaseMeta {
        name: "timing_basics",
        rom: FileRef {
            name: "09.timing_basics.nes",
            sha256: "311698c717e50150edd0b5fd0016c41de686463205c20efb5630d6adb90859fd",
        },
        golden: None,
        result: None,
    },
    CaseMeta {
        name: "timing_order",
        rom: FileRef {
            name: "10.timing_order.nes",
            sha256: "0f36bc07bfe51c416e3cc1a5231053572aa6b15aa60e6d2fd0568be49b6dc2e9",
        },
        golden: None,
        result: None,
    },
    CaseMeta {
        name: "edge_timing",
        rom: FileRef {
            name: "11.edge_timing.nes",
            sha256: "5a7c121f6e76617be88a0a7035c0e402293be5c685c95b97190a8d70835736ab",
        },
        golden: None,
        result: None,
    },
];
