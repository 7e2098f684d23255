//! Code -> glyph name tables for the simple-font base encodings and the
//! built-in encodings of Symbol and ZapfDingbats.
//!
//! Codes are octal to line up with the published encoding tables.

/// Printable ASCII shared by StandardEncoding, WinAnsiEncoding and
/// MacRomanEncoding. Codes 047 and 0140 differ between them and live in the
/// per-encoding lists.
static ASCII_COMMON: &[(u8, &str)] = &[
    (0o040, "space"),
    (0o041, "exclam"),
    (0o042, "quotedbl"),
    (0o043, "numbersign"),
    (0o044, "dollar"),
    (0o045, "percent"),
    (0o046, "ampersand"),
    (0o050, "parenleft"),
    (0o051, "parenright"),
    (0o052, "asterisk"),
    (0o053, "plus"),
    (0o054, "comma"),
    (0o055, "hyphen"),
    (0o056, "period"),
    (0o057, "slash"),
    (0o060, "zero"),
    (0o061, "one"),
    (0o062, "two"),
    (0o063, "three"),
    (0o064, "four"),
    (0o065, "five"),
    (0o066, "six"),
    (0o067, "seven"),
    (0o070, "eight"),
    (0o071, "nine"),
    (0o072, "colon"),
    (0o073, "semicolon"),
    (0o074, "less"),
    (0o075, "equal"),
    (0o076, "greater"),
    (0o077, "question"),
    (0o100, "at"),
    (0o101, "A"),
    (0o102, "B"),
    (0o103, "C"),
    (0o104, "D"),
    (0o105, "E"),
    (0o106, "F"),
    (0o107, "G"),
    (0o110, "H"),
    (0o111, "I"),
    (0o112, "J"),
    (0o113, "K"),
    (0o114, "L"),
    (0o115, "M"),
    (0o116, "N"),
    (0o117, "O"),
    (0o120, "P"),
    (0o121, "Q"),
    (0o122, "R"),
    (0o123, "S"),
    (0o124, "T"),
    (0o125, "U"),
    (0o126, "V"),
    (0o127, "W"),
    (0o130, "X"),
    (0o131, "Y"),
    (0o132, "Z"),
    (0o133, "bracketleft"),
    (0o134, "backslash"),
    (0o135, "bracketright"),
    (0o136, "asciicircum"),
    (0o137, "underscore"),
    (0o141, "a"),
    (0o142, "b"),
    (0o143, "c"),
    (0o144, "d"),
    (0o145, "e"),
    (0o146, "f"),
    (0o147, "g"),
    (0o150, "h"),
    (0o151, "i"),
    (0o152, "j"),
    (0o153, "k"),
    (0o154, "l"),
    (0o155, "m"),
    (0o156, "n"),
    (0o157, "o"),
    (0o160, "p"),
    (0o161, "q"),
    (0o162, "r"),
    (0o163, "s"),
    (0o164, "t"),
    (0o165, "u"),
    (0o166, "v"),
    (0o167, "w"),
    (0o170, "x"),
    (0o171, "y"),
    (0o172, "z"),
    (0o173, "braceleft"),
    (0o174, "bar"),
    (0o175, "braceright"),
    (0o176, "asciitilde"),
];

static STANDARD_EXTRA: &[(u8, &str)] = &[
    (0o047, "quoteright"),
    (0o140, "quoteleft"),
    (0o241, "exclamdown"),
    (0o242, "cent"),
    (0o243, "sterling"),
    (0o244, "fraction"),
    (0o245, "yen"),
    (0o246, "florin"),
    (0o247, "section"),
    (0o250, "currency"),
    (0o251, "quotesingle"),
    (0o252, "quotedblleft"),
    (0o253, "guillemotleft"),
    (0o254, "guilsinglleft"),
    (0o255, "guilsinglright"),
    (0o256, "fi"),
    (0o257, "fl"),
    (0o261, "endash"),
    (0o262, "dagger"),
    (0o263, "daggerdbl"),
    (0o264, "periodcentered"),
    (0o266, "paragraph"),
    (0o267, "bullet"),
    (0o270, "quotesinglbase"),
    (0o271, "quotedblbase"),
    (0o272, "quotedblright"),
    (0o273, "guillemotright"),
    (0o274, "ellipsis"),
    (0o275, "perthousand"),
    (0o277, "questiondown"),
    (0o301, "grave"),
    (0o302, "acute"),
    (0o303, "circumflex"),
    (0o304, "tilde"),
    (0o305, "macron"),
    (0o306, "breve"),
    (0o307, "dotaccent"),
    (0o310, "dieresis"),
    (0o312, "ring"),
    (0o313, "cedilla"),
    (0o315, "hungarumlaut"),
    (0o316, "ogonek"),
    (0o317, "caron"),
    (0o320, "emdash"),
    (0o341, "AE"),
    (0o343, "ordfeminine"),
    (0o350, "Lslash"),
    (0o351, "Oslash"),
    (0o352, "OE"),
    (0o353, "ordmasculine"),
    (0o361, "ae"),
    (0o365, "dotlessi"),
    (0o370, "lslash"),
    (0o371, "oslash"),
    (0o372, "oe"),
    (0o373, "germandbls"),
];

/// Latin-1 upper half, identical in WinAnsiEncoding for 0240..0377.
static LATIN1_UPPER: &[(u8, &str)] = &[
    (0o240, "space"),
    (0o241, "exclamdown"),
    (0o242, "cent"),
    (0o243, "sterling"),
    (0o244, "currency"),
    (0o245, "yen"),
    (0o246, "brokenbar"),
    (0o247, "section"),
    (0o250, "dieresis"),
    (0o251, "copyright"),
    (0o252, "ordfeminine"),
    (0o253, "guillemotleft"),
    (0o254, "logicalnot"),
    (0o255, "hyphen"),
    (0o256, "registered"),
    (0o257, "macron"),
    (0o260, "degree"),
    (0o261, "plusminus"),
    (0o262, "twosuperior"),
    (0o263, "threesuperior"),
    (0o264, "acute"),
    (0o265, "mu"),
    (0o266, "paragraph"),
    (0o267, "periodcentered"),
    (0o270, "cedilla"),
    (0o271, "onesuperior"),
    (0o272, "ordmasculine"),
    (0o273, "guillemotright"),
    (0o274, "onequarter"),
    (0o275, "onehalf"),
    (0o276, "threequarters"),
    (0o277, "questiondown"),
    (0o300, "Agrave"),
    (0o301, "Aacute"),
    (0o302, "Acircumflex"),
    (0o303, "Atilde"),
    (0o304, "Adieresis"),
    (0o305, "Aring"),
    (0o306, "AE"),
    (0o307, "Ccedilla"),
    (0o310, "Egrave"),
    (0o311, "Eacute"),
    (0o312, "Ecircumflex"),
    (0o313, "Edieresis"),
    (0o314, "Igrave"),
    (0o315, "Iacute"),
    (0o316, "Icircumflex"),
    (0o317, "Idieresis"),
    (0o320, "Eth"),
    (0o321, "Ntilde"),
    (0o322, "Ograve"),
    (0o323, "Oacute"),
    (0o324, "Ocircumflex"),
    (0o325, "Otilde"),
    (0o326, "Odieresis"),
    (0o327, "multiply"),
    (0o330, "Oslash"),
    (0o331, "Ugrave"),
    (0o332, "Uacute"),
    (0o333, "Ucircumflex"),
    (0o334, "Udieresis"),
    (0o335, "Yacute"),
    (0o336, "Thorn"),
    (0o337, "germandbls"),
    (0o340, "agrave"),
    (0o341, "aacute"),
    (0o342, "acircumflex"),
    (0o343, "atilde"),
    (0o344, "adieresis"),
    (0o345, "aring"),
    (0o346, "ae"),
    (0o347, "ccedilla"),
    (0o350, "egrave"),
    (0o351, "eacute"),
    (0o352, "ecircumflex"),
    (0o353, "edieresis"),
    (0o354, "igrave"),
    (0o355, "iacute"),
    (0o356, "icircumflex"),
    (0o357, "idieresis"),
    (0o360, "eth"),
    (0o361, "ntilde"),
    (0o362, "ograve"),
    (0o363, "oacute"),
    (0o364, "ocircumflex"),
    (0o365, "otilde"),
    (0o366, "odieresis"),
    (0o367, "divide"),
    (0o370, "oslash"),
    (0o371, "ugrave"),
    (0o372, "uacute"),
    (0o373, "ucircumflex"),
    (0o374, "udieresis"),
    (0o375, "yacute"),
    (0o376, "thorn"),
    (0o377, "ydieresis"),
];

static WIN_ANSI_EXTRA: &[(u8, &str)] = &[
    (0o047, "quotesingle"),
    (0o140, "grave"),
    (0o200, "Euro"),
    (0o202, "quotesinglbase"),
    (0o203, "florin"),
    (0o204, "quotedblbase"),
    (0o205, "ellipsis"),
    (0o206, "dagger"),
    (0o207, "daggerdbl"),
    (0o210, "circumflex"),
    (0o211, "perthousand"),
    (0o212, "Scaron"),
    (0o213, "guilsinglleft"),
    (0o214, "OE"),
    (0o216, "Zcaron"),
    (0o221, "quoteleft"),
    (0o222, "quoteright"),
    (0o223, "quotedblleft"),
    (0o224, "quotedblright"),
    (0o225, "bullet"),
    (0o226, "endash"),
    (0o227, "emdash"),
    (0o230, "tilde"),
    (0o231, "trademark"),
    (0o232, "scaron"),
    (0o233, "guilsinglright"),
    (0o234, "oe"),
    (0o236, "zcaron"),
    (0o237, "Ydieresis"),
];

pub(crate) static WIN_ANSI: &[&[(u8, &str)]] = &[ASCII_COMMON, WIN_ANSI_EXTRA, LATIN1_UPPER];

static MAC_ROMAN_EXTRA: &[(u8, &str)] = &[
    (0o047, "quotesingle"),
    (0o140, "grave"),
    (0o200, "Adieresis"),
    (0o201, "Aring"),
    (0o202, "Ccedilla"),
    (0o203, "Eacute"),
    (0o204, "Ntilde"),
    (0o205, "Odieresis"),
    (0o206, "Udieresis"),
    (0o207, "aacute"),
    (0o210, "agrave"),
    (0o211, "acircumflex"),
    (0o212, "adieresis"),
    (0o213, "atilde"),
    (0o214, "aring"),
    (0o215, "ccedilla"),
    (0o216, "eacute"),
    (0o217, "egrave"),
    (0o220, "ecircumflex"),
    (0o221, "edieresis"),
    (0o222, "iacute"),
    (0o223, "igrave"),
    (0o224, "icircumflex"),
    (0o225, "idieresis"),
    (0o226, "ntilde"),
    (0o227, "oacute"),
    (0o230, "ograve"),
    (0o231, "ocircumflex"),
    (0o232, "odieresis"),
    (0o233, "otilde"),
    (0o234, "uacute"),
    (0o235, "ugrave"),
    (0o236, "ucircumflex"),
    (0o237, "udieresis"),
    (0o240, "dagger"),
    (0o241, "degree"),
    (0o242, "cent"),
    (0o243, "sterling"),
    (0o244, "section"),
    (0o245, "bullet"),
    (0o246, "paragraph"),
    (0o247, "germandbls"),
    (0o250, "registered"),
    (0o251, "copyright"),
    (0o252, "trademark"),
    (0o253, "acute"),
    (0o254, "dieresis"),
    (0o256, "AE"),
    (0o257, "Oslash"),
    (0o261, "plusminus"),
    (0o264, "yen"),
    (0o265, "mu"),
    (0o273, "ordfeminine"),
    (0o274, "ordmasculine"),
    (0o276, "ae"),
    (0o277, "oslash"),
    (0o300, "questiondown"),
    (0o301, "exclamdown"),
    (0o302, "logicalnot"),
    (0o304, "florin"),
    (0o307, "guillemotleft"),
    (0o310, "guillemotright"),
    (0o311, "ellipsis"),
    (0o312, "space"),
    (0o313, "Agrave"),
    (0o314, "Atilde"),
    (0o315, "Otilde"),
    (0o316, "OE"),
    (0o317, "oe"),
    (0o320, "endash"),
    (0o321, "emdash"),
    (0o322, "quotedblleft"),
    (0o323, "quotedblright"),
    (0o324, "quoteleft"),
    (0o325, "quoteright"),
    (0o326, "divide"),
    (0o330, "ydieresis"),
    (0o331, "Ydieresis"),
    (0o332, "fraction"),
    (0o333, "currency"),
    (0o334, "guilsinglleft"),
    (0o335, "guilsinglright"),
    (0o336, "fi"),
    (0o337, "fl"),
    (0o340, "daggerdbl"),
    (0o341, "periodcentered"),
    (0o342, "quotesinglbase"),
    (0o343, "quotedblbase"),
    (0o344, "perthousand"),
    (0o345, "Acircumflex"),
    (0o346, "Ecircumflex"),
    (0o347, "Aacute"),
    (0o350, "Edieresis"),
    (0o351, "Egrave"),
    (0o352, "Iacute"),
    (0o353, "Icircumflex"),
    (0o354, "Idieresis"),
    (0o355, "Igrave"),
    (0o356, "Oacute"),
    (0o357, "Ocircumflex"),
    (0o361, "Ograve"),
    (0o362, "Uacute"),
    (0o363, "Ucircumflex"),
    (0o364, "Ugrave"),
    (0o365, "dotlessi"),
    (0o366, "circumflex"),
    (0o367, "tilde"),
    (0o370, "macron"),
    (0o371, "breve"),
    (0o372, "dotaccent"),
    (0o373, "ring"),
    (0o374, "cedilla"),
    (0o375, "hungarumlaut"),
    (0o376, "ogonek"),
    (0o377, "caron"),
];

pub(crate) static MAC_ROMAN: &[&[(u8, &str)]] = &[ASCII_COMMON, MAC_ROMAN_EXTRA];

pub(crate) static STANDARD: &[&[(u8, &str)]] = &[ASCII_COMMON, STANDARD_EXTRA];

/// Built-in encoding of the Symbol font program.
pub(crate) static SYMBOL: &[(u8, &str)] = &[
    (0o040, "space"),
    (0o041, "exclam"),
    (0o042, "universal"),
    (0o043, "numbersign"),
    (0o044, "existential"),
    (0o045, "percent"),
    (0o046, "ampersand"),
    (0o047, "suchthat"),
    (0o050, "parenleft"),
    (0o051, "parenright"),
    (0o052, "asteriskmath"),
    (0o053, "plus"),
    (0o054, "comma"),
    (0o055, "minus"),
    (0o056, "period"),
    (0o057, "slash"),
    (0o060, "zero"),
    (0o061, "one"),
    (0o062, "two"),
    (0o063, "three"),
    (0o064, "four"),
    (0o065, "five"),
    (0o066, "six"),
    (0o067, "seven"),
    (0o070, "eight"),
    (0o071, "nine"),
    (0o072, "colon"),
    (0o073, "semicolon"),
    (0o074, "less"),
    (0o075, "equal"),
    (0o076, "greater"),
    (0o077, "question"),
    (0o100, "congruent"),
    (0o101, "Alpha"),
    (0o102, "Beta"),
    (0o103, "Chi"),
    (0o104, "Delta"),
    (0o105, "Epsilon"),
    (0o106, "Phi"),
    (0o107, "Gamma"),
    (0o110, "Eta"),
    (0o111, "Iota"),
    (0o112, "theta1"),
    (0o113, "Kappa"),
    (0o114, "Lambda"),
    (0o115, "Mu"),
    (0o116, "Nu"),
    (0o117, "Omicron"),
    (0o120, "Pi"),
    (0o121, "Theta"),
    (0o122, "Rho"),
    (0o123, "Sigma"),
    (0o124, "Tau"),
    (0o125, "Upsilon"),
    (0o126, "sigma1"),
    (0o127, "Omega"),
    (0o130, "Xi"),
    (0o131, "Psi"),
    (0o132, "Zeta"),
    (0o133, "bracketleft"),
    (0o134, "therefore"),
    (0o135, "bracketright"),
    (0o136, "perpendicular"),
    (0o137, "underscore"),
    (0o140, "radicalex"),
    (0o141, "alpha"),
    (0o142, "beta"),
    (0o143, "chi"),
    (0o144, "delta"),
    (0o145, "epsilon"),
    (0o146, "phi"),
    (0o147, "gamma"),
    (0o150, "eta"),
    (0o151, "iota"),
    (0o152, "phi1"),
    (0o153, "kappa"),
    (0o154, "lambda"),
    (0o155, "mu"),
    (0o156, "nu"),
    (0o157, "omicron"),
    (0o160, "pi"),
    (0o161, "theta"),
    (0o162, "rho"),
    (0o163, "sigma"),
    (0o164, "tau"),
    (0o165, "upsilon"),
    (0o166, "omega1"),
    (0o167, "omega"),
    (0o170, "xi"),
    (0o171, "psi"),
    (0o172, "zeta"),
    (0o173, "braceleft"),
    (0o174, "bar"),
    (0o175, "braceright"),
    (0o176, "similar"),
    (0o240, "Euro"),
    (0o241, "Upsilon1"),
    (0o242, "minute"),
    (0o243, "lessequal"),
    (0o244, "fraction"),
    (0o245, "infinity"),
    (0o246, "florin"),
    (0o247, "club"),
    (0o250, "diamond"),
    (0o251, "heart"),
    (0o252, "spade"),
    (0o253, "arrowboth"),
    (0o254, "arrowleft"),
    (0o255, "arrowup"),
    (0o256, "arrowright"),
    (0o257, "arrowdown"),
    (0o260, "degree"),
    (0o261, "plusminus"),
    (0o262, "second"),
    (0o263, "greaterequal"),
    (0o264, "multiply"),
    (0o265, "proportional"),
    (0o266, "partialdiff"),
    (0o267, "bullet"),
    (0o270, "divide"),
    (0o271, "notequal"),
    (0o272, "equivalence"),
    (0o273, "approxequal"),
    (0o274, "ellipsis"),
    (0o275, "arrowvertex"),
    (0o276, "arrowhorizex"),
    (0o277, "carriagereturn"),
    (0o300, "aleph"),
    (0o301, "Ifraktur"),
    (0o302, "Rfraktur"),
    (0o303, "weierstrass"),
    (0o304, "circlemultiply"),
    (0o305, "circleplus"),
    (0o306, "emptyset"),
    (0o307, "intersection"),
    (0o310, "union"),
    (0o311, "propersuperset"),
    (0o312, "reflexsuperset"),
    (0o313, "notsubset"),
    (0o314, "propersubset"),
    (0o315, "reflexsubset"),
    (0o316, "element"),
    (0o317, "notelement"),
    (0o320, "angle"),
    (0o321, "gradient"),
    (0o322, "registerserif"),
    (0o323, "copyrightserif"),
    (0o324, "trademarkserif"),
    (0o325, "product"),
    (0o326, "radical"),
    (0o327, "dotmath"),
    (0o330, "logicalnot"),
    (0o331, "logicaland"),
    (0o332, "logicalor"),
    (0o333, "arrowdblboth"),
    (0o334, "arrowdblleft"),
    (0o335, "arrowdblup"),
    (0o336, "arrowdblright"),
    (0o337, "arrowdbldown"),
    (0o340, "lozenge"),
    (0o341, "angleleft"),
    (0o342, "registersans"),
    (0o343, "copyrightsans"),
    (0o344, "trademarksans"),
    (0o345, "summation"),
    (0o346, "parenlefttp"),
    (0o347, "parenleftex"),
    (0o350, "parenleftbt"),
    (0o351, "bracketlefttp"),
    (0o352, "bracketleftex"),
    (0o353, "bracketleftbt"),
    (0o354, "bracelefttp"),
    (0o355, "braceleftmid"),
    (0o356, "braceleftbt"),
    (0o357, "braceex"),
    (0o361, "angleright"),
    (0o362, "integral"),
    (0o363, "integraltp"),
    (0o364, "integralex"),
    (0o365, "integralbt"),
    (0o366, "parenrighttp"),
    (0o367, "parenrightex"),
    (0o370, "parenrightbt"),
    (0o371, "bracketrighttp"),
    (0o372, "bracketrightex"),
    (0o373, "bracketrightbt"),
    (0o374, "bracerighttp"),
    (0o375, "bracerightmid"),
    (0o376, "bracerightbt"),
];

/// Built-in encoding of the ZapfDingbats font program.
pub(crate) static ZAPF_DINGBATS: &[(u8, &str)] = &[
    (0o040, "space"),
    (0o041, "a1"),
    (0o042, "a2"),
    (0o043, "a202"),
    (0o044, "a3"),
    (0o045, "a4"),
    (0o046, "a5"),
    (0o047, "a119"),
    (0o050, "a118"),
    (0o051, "a117"),
    (0o052, "a11"),
    (0o053, "a12"),
    (0o054, "a13"),
    (0o055, "a14"),
    (0o056, "a15"),
    (0o057, "a16"),
    (0o060, "a105"),
    (0o061, "a17"),
    (0o062, "a18"),
    (0o063, "a19"),
    (0o064, "a20"),
    (0o065, "a21"),
    (0o066, "a22"),
    (0o067, "a23"),
    (0o070, "a24"),
    (0o071, "a25"),
    (0o072, "a26"),
    (0o073, "a27"),
    (0o074, "a28"),
    (0o075, "a6"),
    (0o076, "a7"),
    (0o077, "a8"),
    (0o100, "a9"),
    (0o101, "a10"),
    (0o102, "a29"),
    (0o103, "a30"),
    (0o104, "a31"),
    (0o105, "a32"),
    (0o106, "a33"),
    (0o107, "a34"),
    (0o110, "a35"),
    (0o111, "a36"),
    (0o112, "a37"),
    (0o113, "a38"),
    (0o114, "a39"),
    (0o115, "a40"),
    (0o116, "a41"),
    (0o117, "a42"),
    (0o120, "a43"),
    (0o121, "a44"),
    (0o122, "a45"),
    (0o123, "a46"),
    (0o124, "a47"),
    (0o125, "a48"),
    (0o126, "a49"),
    (0o127, "a50"),
    (0o130, "a51"),
    (0o131, "a52"),
    (0o132, "a53"),
    (0o133, "a54"),
    (0o134, "a55"),
    (0o135, "a56"),
    (0o136, "a57"),
    (0o137, "a58"),
    (0o140, "a59"),
    (0o141, "a60"),
    (0o142, "a61"),
    (0o143, "a62"),
    (0o144, "a63"),
    (0o145, "a64"),
    (0o146, "a65"),
    (0o147, "a66"),
    (0o150, "a67"),
    (0o151, "a68"),
    (0o152, "a69"),
    (0o153, "a70"),
    (0o154, "a71"),
    (0o155, "a72"),
    (0o156, "a73"),
    (0o157, "a74"),
    (0o160, "a203"),
    (0o161, "a75"),
    (0o162, "a204"),
    (0o163, "a76"),
    (0o164, "a77"),
    (0o165, "a78"),
    (0o166, "a79"),
    (0o167, "a81"),
    (0o170, "a82"),
    (0o171, "a83"),
    (0o172, "a84"),
    (0o173, "a97"),
    (0o174, "a98"),
    (0o175, "a99"),
    (0o176, "a100"),
    (0o200, "a89"),
    (0o201, "a90"),
    (0o202, "a93"),
    (0o203, "a94"),
    (0o204, "a91"),
    (0o205, "a92"),
    (0o206, "a205"),
    (0o207, "a85"),
    (0o210, "a206"),
    (0o211, "a86"),
    (0o212, "a87"),
    (0o213, "a88"),
    (0o214, "a95"),
    (0o215, "a96"),
    (0o241, "a101"),
    (0o242, "a102"),
    (0o243, "a103"),
    (0o244, "a104"),
    (0o245, "a106"),
    (0o246, "a107"),
    (0o247, "a108"),
    (0o250, "a112"),
    (0o251, "a111"),
    (0o252, "a110"),
    (0o253, "a109"),
    (0o254, "a120"),
    (0o255, "a121"),
    (0o256, "a122"),
    (0o257, "a123"),
    (0o260, "a124"),
    (0o261, "a125"),
    (0o262, "a126"),
    (0o263, "a127"),
    (0o264, "a128"),
    (0o265, "a129"),
    (0o266, "a130"),
    (0o267, "a131"),
    (0o270, "a132"),
    (0o271, "a133"),
    (0o272, "a134"),
    (0o273, "a135"),
    (0o274, "a136"),
    (0o275, "a137"),
    (0o276, "a138"),
    (0o277, "a139"),
    (0o300, "a140"),
    (0o301, "a141"),
    (0o302, "a142"),
    (0o303, "a143"),
    (0o304, "a144"),
    (0o305, "a145"),
    (0o306, "a146"),
    (0o307, "a147"),
    (0o310, "a148"),
    (0o311, "a149"),
    (0o312, "a150"),
    (0o313, "a151"),
    (0o314, "a152"),
    (0o315, "a153"),
    (0o316, "a154"),
    (0o317, "a155"),
    (0o320, "a156"),
    (0o321, "a157"),
    (0o322, "a158"),
    (0o323, "a159"),
    (0o324, "a160"),
    (0o325, "a161"),
    (0o326, "a163"),
    (0o327, "a164"),
    (0o330, "a196"),
    (0o331, "a165"),
    (0o332, "a192"),
    (0o333, "a166"),
    (0o334, "a167"),
    (0o335, "a168"),
    (0o336, "a169"),
    (0o337, "a170"),
    (0o340, "a171"),
    (0o341, "a172"),
    (0o342, "a173"),
    (0o343, "a162"),
    (0o344, "a174"),
    (0o345, "a175"),
    (0o346, "a176"),
    (0o347, "a177"),
    (0o350, "a178"),
    (0o351, "a179"),
    (0o352, "a193"),
    (0o353, "a180"),
    (0o354, "a199"),
    (0o355, "a181"),
    (0o356, "a200"),
    (0o357, "a182"),
    (0o361, "a201"),
    (0o362, "a183"),
    (0o363, "a184"),
    (0o364, "a197"),
    (0o365, "a185"),
    (0o366, "a194"),
    (0o367, "a198"),
    (0o370, "a186"),
    (0o371, "a195"),
    (0o372, "a187"),
    (0o373, "a188"),
    (0o374, "a189"),
    (0o375, "a190"),
    (0o376, "a191"),
];
