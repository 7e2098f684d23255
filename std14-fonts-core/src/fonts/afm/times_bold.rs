//! Times-Bold advance widths (Times-Bold.afm).

pub(crate) static WIDTHS: &[(&str, f64)] = &[
    ("A", 722.0),
    ("AE", 1000.0),
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
    ("C", 722.0),
    ("Cacute", 722.0),
    ("Ccaron", 722.0),
    ("Ccedilla", 722.0),
    ("D", 722.0),
    ("Dcaron", 722.0),
    ("Dcroat", 722.0),
    ("Delta", 612.0),
    ("E", 667.0),
    ("Eacute", 667.0),
    ("Ecaron", 667.0),
    ("Ecircumflex", 667.0),
    ("Edieresis", 667.0),
    ("Edotaccent", 667.0),
    ("Egrave", 667.0),
    ("Emacron", 667.0),
    ("Eogonek", 667.0),
    ("Eth", 722.0),
    ("Euro", 500.0),
    ("F", 611.0),
    ("G", 778.0),
    ("Gbreve", 778.0),
    ("Gcommaaccent", 778.0),
    ("H", 778.0),
    ("I", 389.0),
    ("Iacute", 389.0),
    ("Icircumflex", 389.0),
    ("Idieresis", 389.0),
    ("Idotaccent", 389.0),
    ("Igrave", 389.0),
    ("Imacron", 389.0),
    ("Iogonek", 389.0),
    ("J", 500.0),
    ("K", 778.0),
    ("Kcommaaccent", 778.0),
    ("L", 667.0),
    ("Lacute", 667.0),
    ("Lcaron", 667.0),
    ("Lcommaaccent", 667.0),
    ("Lslash", 667.0),
    ("M", 944.0),
    ("N", 722.0),
    ("Nacute", 722.0),
    ("Ncaron", 722.0),
    ("Ncommaaccent", 722.0),
    ("Ntilde", 722.0),
    ("O", 778.0),
    ("OE", 1000.0),
    ("Oacute", 778.0),
    ("Ocircumflex", 778.0),
    ("Odieresis", 778.0),
    ("Ograve", 778.0),
    ("Ohungarumlaut", 778.0),
    ("Omacron", 778.0),
    ("Oslash", 778.0),
    ("Otilde", 778.0),
    ("P", 611.0),
    ("Q", 778.0),
    ("R", 722.0),
    ("Racute", 722.0),
    ("Rcaron", 722.0),
    ("Rcommaaccent", 722.0),
    ("S", 556.0),
    ("Sacute", 556.0),
    ("Scaron", 556.0),
    ("Scedilla", 556.0),
    ("Scommaaccent", 556.0),
    ("T", 667.0),
    ("Tcaron", 667.0),
    ("Tcommaaccent", 667.0),
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
    ("V", 722.0),
    ("W", 1000.0),
    ("X", 722.0),
    ("Y", 722.0),
    ("Yacute", 722.0),
    ("Ydieresis", 722.0),
    ("Z", 667.0),
    ("Zacute", 667.0),
    ("Zcaron", 667.0),
    ("Zdotaccent", 667.0),
    ("a", 500.0),
    ("aacute", 500.0),
    ("abreve", 500.0),
    ("acircumflex", 500.0),
    ("acute", 333.0),
    ("adieresis", 500.0),
    ("ae", 722.0),
    ("agrave", 500.0),
    ("amacron", 500.0),
    ("ampersand", 833.0),
    ("aogonek", 500.0),
    ("aring", 500.0),
    ("asciicircum", 581.0),
    ("asciitilde", 520.0),
    ("asterisk", 500.0),
    ("at", 930.0),
    ("atilde", 500.0),
    ("b", 556.0),
    ("backslash", 278.0),
    ("bar", 220.0),
    ("braceleft", 394.0),
    ("braceright", 394.0),
    ("bracketleft", 333.0),
    ("bracketright", 333.0),
    ("breve", 333.0),
    ("brokenbar", 220.0),
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
    ("copyright", 747.0),
    ("currency", 500.0),
    ("d", 556.0),
    ("dagger", 500.0),
    ("daggerdbl", 500.0),
    ("dcaron", 672.0),
    ("dcroat", 556.0),
    ("degree", 400.0),
    ("dieresis", 333.0),
    ("divide", 570.0),
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
    ("equal", 570.0),
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
    ("germandbls", 556.0),
    ("grave", 333.0),
    ("greater", 570.0),
    ("greaterequal", 549.0),
    ("guillemotleft", 500.0),
    ("guillemotright", 500.0),
    ("guilsinglleft", 333.0),
    ("guilsinglright", 333.0),
    ("h", 556.0),
    ("hungarumlaut", 333.0),
    ("hyphen", 333.0),
    ("i", 278.0),
    ("iacute", 278.0),
    ("icircumflex", 278.0),
    ("idieresis", 278.0),
    ("igrave", 278.0),
    ("imacron", 278.0),
    ("iogonek", 278.0),
    ("j", 333.0),
    ("k", 556.0),
    ("kcommaaccent", 556.0),
    ("l", 278.0),
    ("lacute", 278.0),
    ("lcaron", 394.0),
    ("lcommaaccent", 278.0),
    ("less", 570.0),
    ("lessequal", 549.0),
    ("logicalnot", 570.0),
    ("lozenge", 494.0),
    ("lslash", 278.0),
    ("m", 833.0),
    ("macron", 333.0),
    ("minus", 570.0),
    ("mu", 556.0),
    ("multiply", 570.0),
    ("n", 556.0),
    ("nacute", 556.0),
    ("ncaron", 556.0),
    ("ncommaaccent", 556.0),
    ("nine", 500.0),
    ("notequal", 549.0),
    ("ntilde", 556.0),
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
    ("ordfeminine", 300.0),
    ("ordmasculine", 330.0),
    ("oslash", 500.0),
    ("otilde", 500.0),
    ("p", 556.0),
    ("paragraph", 540.0),
    ("parenleft", 333.0),
    ("parenright", 333.0),
    ("partialdiff", 494.0),
    ("percent", 1000.0),
    ("period", 250.0),
    ("periodcentered", 250.0),
    ("perthousand", 1000.0),
    ("plus", 570.0),
    ("plusminus", 570.0),
    ("q", 556.0),
    ("question", 500.0),
    ("questiondown", 500.0),
    ("quotedbl", 555.0),
    ("quotedblbase", 500.0),
    ("quotedblleft", 500.0),
    ("quotedblright", 500.0),
    ("quoteleft", 333.0),
    ("quoteright", 333.0),
    ("quotesinglbase", 333.0),
    ("quotesingle", 278.0),
    ("r", 444.0),
    ("racute", 444.0),
    ("radical", 549.0),
    ("rcaron", 444.0),
    ("rcommaaccent", 444.0),
    ("registered", 747.0),
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
    ("t", 333.0),
    ("tcaron", 416.0),
    ("tcommaaccent", 333.0),
    ("thorn", 556.0),
    ("three", 500.0),
    ("threequarters", 750.0),
    ("threesuperior", 300.0),
    ("tilde", 333.0),
    ("trademark", 1000.0),
    ("two", 500.0),
    ("twosuperior", 300.0),
    ("u", 556.0),
    ("uacute", 556.0),
    ("ucircumflex", 556.0),
    ("udieresis", 556.0),
    ("ugrave", 556.0),
    ("uhungarumlaut", 556.0),
    ("umacron", 556.0),
    ("underscore", 500.0),
    ("uogonek", 556.0),
    ("uring", 556.0),
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
