//! Times-Roman advance widths (Times-Roman.afm).

pub(crate) static WIDTHS: &[(&str, f64)] = &[
    ("A", 722.0),
    ("AE", 889.0),
    ("Aacute", 722.0),
    ("Abreve", 722.0),
    ("Acircumflex", 722.0),
    ("Adieresis", 722.0),
    ("Agrave", 722.0),
    ("Amacron", 722.0),
    ("Aogonek", 722.0),
    ("Aring", 722.0),
    ("Atilde", 722.0),
    ("B", 667.0),
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
    ("F", 556.0),
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
    ("J", 389.0),
    ("K", 722.0),
    ("Kcommaaccent", 722.0),
    ("L", 611.0),
    ("Lacute", 611.0),
    ("Lcaron", 611.0),
    ("Lcommaaccent", 611.0),
    ("Lslash", 611.0),
    ("M", 889.0),
    ("N", 722.0),
    ("Nacute", 722.0),
    ("Ncaron", 722.0),
    ("Ncommaaccent", 722.0),
    ("Ntilde", 722.0),
    ("O", 722.0),
    ("OE", 889.0),
    ("Oacute", 722.0),
    ("Ocircumflex", 722.0),
    ("Odieresis", 722.0),
    ("Ograve", 722.0),
    ("Ohungarumlaut", 722.0),
    ("Omacron", 722.0),
    ("Oslash", 722.0),
    ("Otilde", 722.0),
    ("P", 556.0),
    ("Q", 722.0),
    ("R", 667.0),
    ("Racute", 667.0),
    ("Rcaron", 667.0),
    ("Rcommaaccent", 667.0),
    ("S", 556.0),
    ("Sacute", 556.0),
    ("Scaron", 556.0),
    ("Scedilla", 556.0),
    ("Scommaaccent", 556.0),
    ("T", 611.0),
    ("Tcaron", 611.0),
    ("Tcommaaccent", 611.0),
    ("Thorn", 556.0),
    ("U", 722.0),
    ("Uacute", 722.0),
    ("Ucircumflex", 722.0),
    ("Udieresis", 722.0),
    ("Ugrave", 722.0),
    ("Uhungarumlaut", 722.0),
    ("Umacron", 722.0),
    ("Uogonek", 722.0),
    ("Uring", 722.0),
    ("V", 722.0),
    ("W", 944.0),
    ("X", 722.0),
    ("Y", 722.0),
    ("Yacute", 722.0),
    ("Ydieresis", 722.0),
    ("Z", 611.0),
    ("Zacute", 611.0),
    ("Zcaron", 611.0),
    ("Zdotaccent", 611.0),
    ("a", 444.0),
    ("aacute", 444.0),
    ("abreve", 444.0),
    ("acircumflex", 444.0),
    ("acute", 333.0),
    ("adieresis", 444.0),
    ("ae", 667.0),
    ("agrave", 444.0),
    ("amacron", 444.0),
    ("ampersand", 778.0),
    ("aogonek", 444.0),
    ("aring", 444.0),
    ("asciicircum", 469.0),
    ("asciitilde", 541.0),
    ("asterisk", 500.0),
    ("at", 921.0),
    ("atilde", 444.0),
    ("b", 500.0),
    ("backslash", 278.0),
    ("bar", 200.0),
    ("braceleft", 480.0),
    ("braceright", 480.0),
    ("bracketleft", 333.0),
    ("bracketright", 333.0),
    ("breve", 333.0),
    ("brokenbar", 200.0),
    ("bullet", 350.0),
    ("c", 444.0),
    ("cacute", 444.0),
    ("caron", 333.0),
    ("ccaron", 444.0),
    ("ccedilla", 444.0),
    ("cedilla", 333.0),
    ("cent", 500.0),
    ("circumflex", 333.0),
    ("colon", 278.0),
    ("comma", 250.0),
    ("commaaccent", 250.0),
    ("copyright", 760.0),
    ("currency", 500.0),
    ("d", 500.0),
    ("dagger", 500.0),
    ("daggerdbl", 500.0),
    ("dcaron", 588.0),
    ("dcroat", 500.0),
    ("degree", 400.0),
    ("dieresis", 333.0),
    ("divide", 564.0),
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
    ("ellipsis", 1000.0),
    ("emacron", 444.0),
    ("emdash", 1000.0),
    ("endash", 500.0),
    ("eogonek", 444.0),
    ("equal", 564.0),
    ("eth", 500.0),
    ("exclam", 333.0),
    ("exclamdown", 333.0),
    ("f", 333.0),
    ("fi", 556.0),
    ("five", 500.0),
    ("fl", 556.0),
    ("florin", 500.0),
    ("four", 500.0),
    ("fraction", 167.0),
    ("g", 500.0),
    ("gbreve", 500.0),
    ("gcommaaccent", 500.0),
    ("germandbls", 500.0),
    ("grave", 333.0),
    ("greater", 564.0),
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
    ("k", 500.0),
    ("kcommaaccent", 500.0),
    ("l", 278.0),
    ("lacute", 278.0),
    ("lcaron", 344.0),
    ("lcommaaccent", 278.0),
    ("less", 564.0),
    ("lessequal", 549.0),
    ("logicalnot", 564.0),
    ("lozenge", 471.0),
    ("lslash", 278.0),
    ("m", 778.0),
    ("macron", 333.0),
    ("minus", 564.0),
    ("mu", 500.0),
    ("multiply", 564.0),
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
    ("oe", 722.0),
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
    ("paragraph", 453.0),
    ("parenleft", 333.0),
    ("parenright", 333.0),
    ("partialdiff", 476.0),
    ("percent", 833.0),
    ("period", 250.0),
    ("periodcentered", 250.0),
    ("perthousand", 1000.0),
    ("plus", 564.0),
    ("plusminus", 564.0),
    ("q", 500.0),
    ("question", 444.0),
    ("questiondown", 444.0),
    ("quotedbl", 408.0),
    ("quotedblbase", 444.0),
    ("quotedblleft", 444.0),
    ("quotedblright", 444.0),
    ("quoteleft", 333.0),
    ("quoteright", 333.0),
    ("quotesinglbase", 333.0),
    ("quotesingle", 180.0),
    ("r", 333.0),
    ("racute", 333.0),
    ("radical", 453.0),
    ("rcaron", 333.0),
    ("rcommaaccent", 333.0),
    ("registered", 760.0),
    ("ring", 333.0),
    ("s", 389.0),
    ("sacute", 389.0),
    ("scaron", 389.0),
    ("scedilla", 389.0),
    ("scommaaccent", 389.0),
    ("section", 500.0),
    ("semicolon", 278.0),
    ("seven", 500.0),
    ("six", 500.0),
    ("slash", 278.0),
    ("space", 250.0),
    ("sterling", 500.0),
    ("summation", 600.0),
    ("t", 278.0),
    ("tcaron", 326.0),
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
    ("v", 500.0),
    ("w", 722.0),
    ("x", 500.0),
    ("y", 500.0),
    ("yacute", 500.0),
    ("ydieresis", 500.0),
    ("yen", 500.0),
    ("z", 444.0),
    ("zacute", 444.0),
    ("zcaron", 444.0),
    ("zdotaccent", 444.0),
    ("zero", 500.0),
];
