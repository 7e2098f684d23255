//! ZapfDingbats advance widths (ZapfDingbats.afm).

pub(crate) static WIDTHS: &[(&str, f64)] = &[
    ("a1", 974.0),
    ("a10", 692.0),
    ("a100", 668.0),
    ("a101", 732.0),
    ("a102", 544.0),
    ("a103", 544.0),
    ("a104", 910.0),
    ("a105", 911.0),
    ("a106", 667.0),
    ("a107", 760.0),
    ("a108", 760.0),
    ("a109", 626.0),
    ("a11", 960.0),
    ("a110", 694.0),
    ("a111", 595.0),
    ("a112", 776.0),
    ("a117", 690.0),
    ("a118", 791.0),
    ("a119", 790.0),
    ("a12", 939.0),
    ("a120", 788.0),
    ("a121", 788.0),
    ("a122", 788.0),
    ("a123", 788.0),
    ("a124", 788.0),
    ("a125", 788.0),
    ("a126", 788.0),
    ("a127", 788.0),
    ("a128", 788.0),
    ("a129", 788.0),
    ("a13", 549.0),
    ("a130", 788.0),
    ("a131", 788.0),
    ("a132", 788.0),
    ("a133", 788.0),
    ("a134", 788.0),
    ("a135", 788.0),
    ("a136", 788.0),
    ("a137", 788.0),
    ("a138", 788.0),
    ("a139", 788.0),
    ("a14", 855.0),
    ("a140", 788.0),
    ("a141", 788.0),
    ("a142", 788.0),
    ("a143", 788.0),
    ("a144", 788.0),
    ("a145", 788.0),
    ("a146", 788.0),
    ("a147", 788.0),
    ("a148", 788.0),
    ("a149", 788.0),
    ("a15", 911.0),
    ("a150", 788.0),
    ("a151", 788.0),
    ("a152", 788.0),
    ("a153", 788.0),
    ("a154", 788.0),
    ("a155", 788.0),
    ("a156", 788.0),
    ("a157", 788.0),
    ("a158", 788.0),
    ("a159", 788.0),
    ("a16", 933.0),
    ("a160", 894.0),
    ("a161", 838.0),
    ("a162", 924.0),
    ("a163", 1016.0),
    ("a164", 458.0),
    ("a165", 924.0),
    ("a166", 918.0),
    ("a167", 927.0),
    ("a168", 928.0),
    ("a169", 928.0),
    ("a17", 945.0),
    ("a170", 834.0),
    ("a171", 873.0),
    ("a172", 828.0),
    ("a173", 924.0),
    ("a174", 917.0),
    ("a175", 930.0),
    ("a176", 931.0),
    ("a177", 463.0),
    ("a178", 883.0),
    ("a179", 836.0),
    ("a18", 974.0),
    ("a180", 867.0),
    ("a181", 696.0),
    ("a182", 874.0),
    ("a183", 760.0),
    ("a184", 946.0),
    ("a185", 865.0),
    ("a186", 967.0),
    ("a187", 831.0),
    ("a188", 873.0),
    ("a189", 927.0),
    ("a19", 755.0),
    ("a190", 970.0),
    ("a191", 918.0),
    ("a192", 748.0),
    ("a193", 836.0),
    ("a194", 771.0),
    ("a195", 888.0),
    ("a196", 748.0),
    ("a197", 771.0),
    ("a198", 888.0),
    ("a199", 867.0),
    ("a2", 961.0),
    ("a20", 846.0),
    ("a200", 696.0),
    ("a201", 874.0),
    ("a202", 974.0),
    ("a203", 762.0),
    ("a204", 759.0),
    ("a205", 509.0),
    ("a206", 410.0),
    ("a21", 762.0),
    ("a22", 761.0),
    ("a23", 571.0),
    ("a24", 677.0),
    ("a25", 763.0),
    ("a26", 760.0),
    ("a27", 759.0),
    ("a28", 754.0),
    ("a29", 786.0),
    ("a3", 980.0),
    ("a30", 788.0),
    ("a31", 788.0),
    ("a32", 790.0),
    ("a33", 793.0),
    ("a34", 794.0),
    ("a35", 816.0),
    ("a36", 823.0),
    ("a37", 789.0),
    ("a38", 841.0),
    ("a39", 823.0),
    ("a4", 719.0),
    ("a40", 833.0),
    ("a41", 816.0),
    ("a42", 831.0),
    ("a43", 923.0),
    ("a44", 744.0),
    ("a45", 723.0),
    ("a46", 749.0),
    ("a47", 790.0),
    ("a48", 792.0),
    ("a49", 695.0),
    ("a5", 789.0),
    ("a50", 776.0),
    ("a51", 768.0),
    ("a52", 792.0),
    ("a53", 759.0),
    ("a54", 707.0),
    ("a55", 708.0),
    ("a56", 682.0),
    ("a57", 701.0),
    ("a58", 826.0),
    ("a59", 815.0),
    ("a6", 494.0),
    ("a60", 789.0),
    ("a61", 789.0),
    ("a62", 707.0),
    ("a63", 687.0),
    ("a64", 696.0),
    ("a65", 689.0),
    ("a66", 786.0),
    ("a67", 787.0),
    ("a68", 713.0),
    ("a69", 791.0),
    ("a7", 552.0),
    ("a70", 785.0),
    ("a71", 791.0),
    ("a72", 873.0),
    ("a73", 761.0),
    ("a74", 762.0),
    ("a75", 759.0),
    ("a76", 892.0),
    ("a77", 892.0),
    ("a78", 788.0),
    ("a79", 784.0),
    ("a8", 537.0),
    ("a81", 438.0),
    ("a82", 138.0),
    ("a83", 277.0),
    ("a84", 415.0),
    ("a85", 509.0),
    ("a86", 410.0),
    ("a87", 234.0),
    ("a88", 234.0),
    ("a89", 390.0),
    ("a9", 577.0),
    ("a90", 390.0),
    ("a91", 276.0),
    ("a92", 276.0),
    ("a93", 317.0),
    ("a94", 317.0),
    ("a95", 334.0),
    ("a96", 334.0),
    ("a97", 392.0),
    ("a98", 392.0),
    ("a99", 668.0),
    ("space", 278.0),
];
