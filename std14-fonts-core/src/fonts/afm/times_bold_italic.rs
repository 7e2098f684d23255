//! Times-BoldItalic advance widths (Times-BoldItalic.afm).

pub(crate) static WIDTHS: &[(&str, f64)] = &[
    ("A", 667.0),
    ("AE", 944.0),
    ("Aacute", 667.0),
    ("Abreve", 667.0),
    ("Acircumflex", 667.0),
    ("Adieresis", 667.0),
    ("Agrave", 667.0),
    ("Amacron", 667.0),
    ("Aogonek", 667.0),
    ("Aring", 667.0),
    ("Atilde", 667.0),
    ("B", 667.0),
    ("C", 667.0),
    ("Cacute", 667.0),
    ("Ccaron", 667.0),
    ("Ccedilla", 667.0),
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
    ("F", 667.0),
    ("G", 722.0),
    ("Gbreve", 722.0),
    ("Gcommaaccent", 722.0),
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
    ("K", 667.0),
    ("Kcommaaccent", 667.0),
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
    ("V", 667.0),
    ("W", 889.0),
    ("X", 667.0),
    ("Y", 611.0),
    ("Yacute", 611.0),
    ("Ydieresis", 611.0),
    ("Z", 611.0),
    ("Zacute", 611.0),
    ("Zcaron", 611.0),
    ("Zdotaccent", 611.0),
    ("a", 500.0),
    ("aacute", 500.0),
    ("abreve", 500.0),
    ("acircumflex", 500.0),
    ("acute", 333.0),
    ("adieresis", 500.0),
    ("ae", 722.0),
    ("agrave", 500.0),
    ("amacron", 500.0),
    ("ampersand", 778.0),
    ("aogonek", 500.0),
    ("aring", 500.0),
    ("asciicircum", 570.0),
    ("asciitilde", 570.0),
    ("asterisk", 500.0),
    ("at", 832.0),
    ("atilde", 500.0),
    ("b", 500.0),
    ("backslash", 278.0),
    ("bar", 220.0),
    ("braceleft", 348.0),
    ("braceright", 348.0),
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
    ("d", 500.0),
    ("dagger", 500.0),
    ("daggerdbl", 500.0),
    ("dcaron", 608.0),
    ("dcroat", 500.0),
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
    ("exclam", 389.0),
    ("exclamdown", 389.0),
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
    ("j", 278.0),
    ("k", 500.0),
    ("kcommaaccent", 500.0),
    ("l", 278.0),
    ("lacute", 278.0),
    ("lcaron", 382.0),
    ("lcommaaccent", 278.0),
    ("less", 570.0),
    ("lessequal", 549.0),
    ("logicalnot", 606.0),
    ("lozenge", 494.0),
    ("lslash", 278.0),
    ("m", 778.0),
    ("macron", 333.0),
    ("minus", 606.0),
    ("mu", 576.0),
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
    ("ordfeminine", 266.0),
    ("ordmasculine", 300.0),
    ("oslash", 500.0),
    ("otilde", 500.0),
    ("p", 500.0),
    ("paragraph", 500.0),
    ("parenleft", 333.0),
    ("parenright", 333.0),
    ("partialdiff", 494.0),
    ("percent", 833.0),
    ("period", 250.0),
    ("periodcentered", 250.0),
    ("perthousand", 1000.0),
    ("plus", 570.0),
    ("plusminus", 570.0),
    ("q", 500.0),
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
    ("r", 389.0),
    ("racute", 389.0),
    ("radical", 549.0),
    ("rcaron", 389.0),
    ("rcommaaccent", 389.0),
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
    ("t", 278.0),
    ("tcaron", 366.0),
    ("tcommaaccent", 278.0),
    ("thorn", 500.0),
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
    ("v", 444.0),
    ("w", 667.0),
    ("x", 500.0),
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
