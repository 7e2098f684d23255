//! Times-Italic advance widths (Times-Italic.afm).

pub(crate) static WIDTHS: &[(&str, f64)] = &[
    ("A", 611.0),
    ("AE", 889.0),
    ("Aacute", 611.0),
    ("Abreve", 611.0),
    ("Acircumflex", 611.0),
    ("Adieresis", 611.0),
    ("Agrave", 611.0),
    ("Amacron", 611.0),
    ("Aogonek", 611.0),
    ("Aring", 611.0),
    ("Atilde", 611.0),
    ("B", 611.0),
    ("C", 667.0),
    ("Cacute", 667.0),
    ("Ccaron", 667.0),
    ("Ccedilla", 667.0),
    ("D", 722.0),
    ("Dcaron", 722.0),
    ("Dcroat", 722.0),
    ("Delta", 612.0),
    ("E", 611.0),
    ("Eacute", 611.0),
    ("Ecaron", 611.0),
    ("Ecircumflex", 611.0),
    ("Edieresis", 611.0),
    ("Edotaccent", 611.0),
    ("Egrave", 611.0),
    ("Emacron", 611.0),
    ("Eogonek", 611.0),
    ("Eth", 722.0),
    ("Euro", 500.0),
    ("F", 611.0),
    ("G", 722.0),
    ("Gbreve", 722.0),
    ("Gcommaaccent", 722.0),
    ("H", 722.0),
    ("I", 333.0),
    ("Iacute", 333.0),
    ("Icircumflex", 333.0),
    ("Idieresis", 333.0),
    ("Idotaccent", 333.0),
    ("Igrave", 333.0),
    ("Imacron", 333.0),
    ("Iogonek", 333.0),
    ("J", 444.0),
    ("K", 667.0),
    ("Kcommaaccent", 667.0),
    ("L", 556.0),
    ("Lacute", 556.0),
    ("Lcaron", 611.0),
    ("Lcommaaccent", 556.0),
    ("Lslash", 556.0),
    ("M", 833.0),
    ("N", 667.0),
    ("Nacute", 667.0),
    ("Ncaron", 667.0),
    ("Ncommaaccent", 667.0),
    ("Ntilde", 667.0),
    ("O", 722.0),
    ("OE", 944.0),
    ("Oacute", 722.0),
    ("Ocircumflex", 722.0),
    ("Odieresis", 722.0),
    ("Ograve", 722.0),
    ("Ohungarumlaut", 722.0),
    ("Omacron", 722.0),
    ("Oslash", 722.0),
    ("Otilde", 722.0),
    ("P", 611.0),
    ("Q", 722.0),
    ("R", 611.0),
    ("Racute", 611.0),
    ("Rcaron", 611.0),
    ("Rcommaaccent", 611.0),
    ("S", 500.0),
    ("Sacute", 500.0),
    ("Scaron", 500.0),
    ("Scedilla", 500.0),
    ("Scommaaccent", 500.0),
    ("T", 556.0),
    ("Tcaron", 556.0),
    ("Tcommaaccent", 556.0),
    ("Thorn", 611.0),
    ("U", 722.0),
    ("Uacute", 722.0),
    ("Ucircumflex", 722.0),
    ("Udieresis", 722.0),
    ("Ugrave", 722.0),
    ("Uhungarumlaut", 722.0),
    ("Umacron", 722.0),
    ("Uogonek", 722.0),
    ("Uring", 722.0),
    ("V", 611.0),
    ("W", 833.0),
    ("X", 611.0),
    ("Y", 556.0),
    ("Yacute", 556.0),
    ("Ydieresis", 556.0),
    ("Z", 556.0),
    ("Zacute", 556.0),
    ("Zcaron", 556.0),
    ("Zdotaccent", 556.0),
    ("a", 500.0),
    ("aacute", 500.0),
    ("abreve", 500.0),
    ("acircumflex", 500.0),
    ("acute", 333.0),
    ("adieresis", 500.0),
    ("ae", 667.0),
    ("agrave", 500.0),
    ("amacron", 500.0),
    ("ampersand", 778.0),
    ("aogonek", 500.0),
    ("aring", 500.0),
    ("asciicircum", 422.0),
    ("asciitilde", 541.0),
    ("asterisk", 500.0),
    ("at", 920.0),
    ("atilde", 500.0),
    ("b", 500.0),
    ("backslash", 278.0),
    ("bar", 275.0),
    ("braceleft", 400.0),
    ("braceright", 400.0),
    ("bracketleft", 389.0),
    ("bracketright", 389.0),
    ("breve", 333.0),
    ("brokenbar", 275.0),
    ("bullet", 350.0),
    ("c", 444.0),
    ("cacute", 444.0),
    ("caron", 333.0),
    ("ccaron", 444.0),
    ("ccedilla", 444.0),
    ("cedilla", 333.0),
    ("cent", 500.0),
    ("circumflex", 333.0),
    ("colon", 333.0),
    ("comma", 250.0),
    ("commaaccent", 250.0),
    ("copyright", 760.0),
    ("currency", 500.0),
    ("d", 500.0),
    ("dagger", 500.0),
    ("daggerdbl", 500.0),
    ("dcaron", 544.0),
    ("dcroat", 500.0),
    ("degree", 400.0),
    ("dieresis", 333.0),
    ("divide", 675.0),
    ("dollar", 500.0),
    ("dotaccent", 333.0),
    ("dotlessi", 278.0),
    ("e", 444.0),
    ("eacute", 444.0),
    ("ecaron", 444.0),
    ("ecircumflex", 444.0),
    ("edieresis", 444.0),
    ("edotaccent", 444.0),
    ("egrave", 444.0),
    ("eight", 500.0),
    ("ellipsis", 889.0),
    ("emacron", 444.0),
    ("emdash", 889.0),
    ("endash", 500.0),
    ("eogonek", 444.0),
    ("equal", 675.0),
    ("eth", 500.0),
    ("exclam", 333.0),
    ("exclamdown", 389.0),
    ("f", 278.0),
    ("fi", 500.0),
    ("five", 500.0),
    ("fl", 500.0),
    ("florin", 500.0),
    ("four", 500.0),
    ("fraction", 167.0),
    ("g", 500.0),
    ("gbreve", 500.0),
    ("gcommaaccent", 500.0),
    ("germandbls", 500.0),
    ("grave", 333.0),
    ("greater", 675.0),
    ("greaterequal", 549.0),
    ("guillemotleft", 500.0),
    ("guillemotright", 500.0),
    ("guilsinglleft", 333.0),
    ("guilsinglright", 333.0),
    ("h", 500.0),
    ("hungarumlaut", 333.0),
    ("hyphen", 333.0),
    ("i", 278.0),
    ("iacute", 278.0),
    ("icircumflex", 278.0),
    ("idieresis", 278.0),
    ("igrave", 278.0),
    ("imacron", 278.0),
    ("iogonek", 278.0),
    ("j", 278.0),
    ("k", 444.0),
    ("kcommaaccent", 444.0),
    ("l", 278.0),
    ("lacute", 278.0),
    ("lcaron", 300.0),
    ("lcommaaccent", 278.0),
    ("less", 675.0),
    ("lessequal", 549.0),
    ("logicalnot", 675.0),
    ("lozenge", 471.0),
    ("lslash", 278.0),
    ("m", 722.0),
    ("macron", 333.0),
    ("minus", 675.0),
    ("mu", 500.0),
    ("multiply", 675.0),
    ("n", 500.0),
    ("nacute", 500.0),
    ("ncaron", 500.0),
    ("ncommaaccent", 500.0),
    ("nine", 500.0),
    ("notequal", 549.0),
    ("ntilde", 500.0),
    ("numbersign", 500.0),
    ("o", 500.0),
    ("oacute", 500.0),
    ("ocircumflex", 500.0),
    ("odieresis", 500.0),
    ("oe", 667.0),
    ("ogonek", 333.0),
    ("ograve", 500.0),
    ("ohungarumlaut", 500.0),
    ("omacron", 500.0),
    ("one", 500.0),
    ("onehalf", 750.0),
    ("onequarter", 750.0),
    ("onesuperior", 300.0),
    ("ordfeminine", 276.0),
    ("ordmasculine", 310.0),
    ("oslash", 500.0),
    ("otilde", 500.0),
    ("p", 500.0),
    ("paragraph", 523.0),
    ("parenleft", 333.0),
    ("parenright", 333.0),
    ("partialdiff", 476.0),
    ("percent", 833.0),
    ("period", 250.0),
    ("periodcentered", 250.0),
    ("perthousand", 1000.0),
    ("plus", 675.0),
    ("plusminus", 675.0),
    ("q", 500.0),
    ("question", 500.0),
    ("questiondown", 500.0),
    ("quotedbl", 420.0),
    ("quotedblbase", 556.0),
    ("quotedblleft", 556.0),
    ("quotedblright", 556.0),
    ("quoteleft", 333.0),
    ("quoteright", 333.0),
    ("quotesinglbase", 333.0),
    ("quotesingle", 214.0),
    ("r", 389.0),
    ("racute", 389.0),
    ("radical", 453.0),
    ("rcaron", 389.0),
    ("rcommaaccent", 389.0),
    ("registered", 760.0),
    ("ring", 333.0),
    ("s", 389.0),
    ("sacute", 389.0),
    ("scaron", 389.0),
    ("scedilla", 389.0),
    ("scommaaccent", 389.0),
    ("section", 500.0),
    ("semicolon", 333.0),
    ("seven", 500.0),
    ("six", 500.0),
    ("slash", 278.0),
    ("space", 250.0),
    ("sterling", 500.0),
    ("summation", 600.0),
    ("t", 278.0),
    ("tcaron", 300.0),
    ("tcommaaccent", 278.0),
    ("thorn", 500.0),
    ("three", 500.0),
    ("threequarters", 750.0),
    ("threesuperior", 300.0),
    ("tilde", 333.0),
    ("trademark", 980.0),
    ("two", 500.0),
    ("twosuperior", 300.0),
    ("u", 500.0),
    ("uacute", 500.0),
    ("ucircumflex", 500.0),
    ("udieresis", 500.0),
    ("ugrave", 500.0),
    ("uhungarumlaut", 500.0),
    ("umacron", 500.0),
    ("underscore", 500.0),
    ("uogonek", 500.0),
    ("uring", 500.0),
    ("v", 444.0),
    ("w", 667.0),
    ("x", 444.0),
    ("y", 444.0),
    ("yacute", 444.0),
    ("ydieresis", 444.0),
    ("yen", 500.0),
    ("z", 389.0),
    ("zacute", 389.0),
    ("zcaron", 389.0),
    ("zdotaccent", 389.0),
    ("zero", 500.0),
];
