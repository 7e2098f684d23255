//! Glyph set shared by the four Courier faces. Every glyph advances 600 units.

pub(crate) const ADVANCE: f64 = 600.0;

pub(crate) static GLYPHS: &[&str] = &[
    "A",
    "AE",
    "Aacute",
    "Abreve",
    "Acircumflex",
    "Adieresis",
    "Agrave",
    "Amacron",
    "Aogonek",
    "Aring",
    "Atilde",
    "B",
    "C",
    "Cacute",
    "Ccaron",
    "Ccedilla",
    "D",
    "Dcaron",
    "Dcroat",
    "Delta",
    "E",
    "Eacute",
    "Ecaron",
    "Ecircumflex",
    "Edieresis",
    "Edotaccent",
    "Egrave",
    "Emacron",
    "Eogonek",
    "Eth",
    "Euro",
    "F",
    "G",
    "Gbreve",
    "Gcommaaccent",
    "H",
    "I",
    "Iacute",
    "Icircumflex",
    "Idieresis",
    "Idotaccent",
    "Igrave",
    "Imacron",
    "Iogonek",
    "J",
    "K",
    "Kcommaaccent",
    "L",
    "Lacute",
    "Lcaron",
    "Lcommaaccent",
    "Lslash",
    "M",
    "N",
    "Nacute",
    "Ncaron",
    "Ncommaaccent",
    "Ntilde",
    "O",
    "OE",
    "Oacute",
    "Ocircumflex",
    "Odieresis",
    "Ograve",
    "Ohungarumlaut",
    "Omacron",
    "Oslash",
    "Otilde",
    "P",
    "Q",
    "R",
    "Racute",
    "Rcaron",
    "Rcommaaccent",
    "S",
    "Sacute",
    "Scaron",
    "Scedilla",
    "Scommaaccent",
    "T",
    "Tcaron",
    "Tcommaaccent",
    "Thorn",
    "U",
    "Uacute",
    "Ucircumflex",
    "Udieresis",
    "Ugrave",
    "Uhungarumlaut",
    "Umacron",
    "Uogonek",
    "Uring",
    "V",
    "W",
    "X",
    "Y",
    "Yacute",
    "Ydieresis",
    "Z",
    "Zacute",
    "Zcaron",
    "Zdotaccent",
    "a",
    "aacute",
    "abreve",
    "acircumflex",
    "acute",
    "adieresis",
    "ae",
    "agrave",
    "amacron",
    "ampersand",
    "aogonek",
    "aring",
    "asciicircum",
    "asciitilde",
    "asterisk",
    "at",
    "atilde",
    "b",
    "backslash",
    "bar",
    "braceleft",
    "braceright",
    "bracketleft",
    "bracketright",
    "breve",
    "brokenbar",
    "bullet",
    "c",
    "cacute",
    "caron",
    "ccaron",
    "ccedilla",
    "cedilla",
    "cent",
    "circumflex",
    "colon",
    "comma",
    "commaaccent",
    "copyright",
    "currency",
    "d",
    "dagger",
    "daggerdbl",
    "dcaron",
    "dcroat",
    "degree",
    "dieresis",
    "divide",
    "dollar",
    "dotaccent",
    "dotlessi",
    "e",
    "eacute",
    "ecaron",
    "ecircumflex",
    "edieresis",
    "edotaccent",
    "egrave",
    "eight",
    "ellipsis",
    "emacron",
    "emdash",
    "endash",
    "eogonek",
    "equal",
    "eth",
    "exclam",
    "exclamdown",
    "f",
    "fi",
    "five",
    "fl",
    "florin",
    "four",
    "fraction",
    "g",
    "gbreve",
    "gcommaaccent",
    "germandbls",
    "grave",
    "greater",
    "greaterequal",
    "guillemotleft",
    "guillemotright",
    "guilsinglleft",
    "guilsinglright",
    "h",
    "hungarumlaut",
    "hyphen",
    "i",
    "iacute",
    "icircumflex",
    "idieresis",
    "igrave",
    "imacron",
    "iogonek",
    "j",
    "k",
    "kcommaaccent",
    "l",
    "lacute",
    "lcaron",
    "lcommaaccent",
    "less",
    "lessequal",
    "logicalnot",
    "lozenge",
    "lslash",
    "m",
    "macron",
    "minus",
    "mu",
    "multiply",
    "n",
    "nacute",
    "ncaron",
    "ncommaaccent",
    "nine",
    "notequal",
    "ntilde",
    "numbersign",
    "o",
    "oacute",
    "ocircumflex",
    "odieresis",
    "oe",
    "ogonek",
    "ograve",
    "ohungarumlaut",
    "omacron",
    "one",
    "onehalf",
    "onequarter",
    "onesuperior",
    "ordfeminine",
    "ordmasculine",
    "oslash",
    "otilde",
    "p",
    "paragraph",
    "parenleft",
    "parenright",
    "partialdiff",
    "percent",
    "period",
    "periodcentered",
    "perthousand",
    "plus",
    "plusminus",
    "q",
    "question",
    "questiondown",
    "quotedbl",
    "quotedblbase",
    "quotedblleft",
    "quotedblright",
    "quoteleft",
    "quoteright",
    "quotesinglbase",
    "quotesingle",
    "r",
    "racute",
    "radical",
    "rcaron",
    "rcommaaccent",
    "registered",
    "ring",
    "s",
    "sacute",
    "scaron",
    "scedilla",
    "scommaaccent",
    "section",
    "semicolon",
    "seven",
    "six",
    "slash",
    "space",
    "sterling",
    "summation",
    "t",
    "tcaron",
    "tcommaaccent",
    "thorn",
    "three",
    "threequarters",
    "threesuperior",
    "tilde",
    "trademark",
    "two",
    "twosuperior",
    "u",
    "uacute",
    "ucircumflex",
    "udieresis",
    "ugrave",
    "uhungarumlaut",
    "umacron",
    "underscore",
    "uogonek",
    "uring",
    "v",
    "w",
    "x",
    "y",
    "yacute",
    "ydieresis",
    "yen",
    "z",
    "zacute",
    "zcaron",
    "zdotaccent",
    "zero",
];
