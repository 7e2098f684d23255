//! Helvetica-Bold and Helvetica-BoldOblique advance widths (Helvetica-Bold.afm, Helvetica-BoldOblique.afm).

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
    ("B", 722.0),
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
    ("Euro", 556.0),
    ("F", 611.0),
    ("G", 778.0),
    ("Gbreve", 778.0),
    ("Gcommaaccent", 778.0),
    ("H", 722.0),
    ("I", 278.0),
    ("Iacute", 278.0),
    ("Icircumflex", 278.0),
    ("Idieresis", 278.0),
    ("Idotaccent", 278.0),
    ("Igrave", 278.0),
    ("Imacron", 278.0),
    ("Iogonek", 278.0),
    ("J", 556.0),
    ("K", 722.0),
    ("Kcommaaccent", 722.0),
    ("L", 611.0),
    ("Lacute", 611.0),
    ("Lcaron", 611.0),
    ("Lcommaaccent", 611.0),
    ("Lslash", 611.0),
    ("M", 833.0),
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
    ("P", 667.0),
    ("Q", 778.0),
    ("R", 722.0),
    ("Racute", 722.0),
    ("Rcaron", 722.0),
    ("Rcommaaccent", 722.0),
    ("S", 667.0),
    ("Sacute", 667.0),
    ("Scaron", 667.0),
    ("Scedilla", 667.0),
    ("Scommaaccent", 667.0),
    ("T", 611.0),
    ("Tcaron", 611.0),
    ("Tcommaaccent", 611.0),
    ("Thorn", 667.0),
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
    ("W", 944.0),
    ("X", 667.0),
    ("Y", 667.0),
    ("Yacute", 667.0),
    ("Ydieresis", 667.0),
    ("Z", 611.0),
    ("Zacute", 611.0),
    ("Zcaron", 611.0),
    ("Zdotaccent", 611.0),
    ("a", 556.0),
    ("aacute", 556.0),
    ("abreve", 556.0),
    ("acircumflex", 556.0),
    ("acute", 333.0),
    ("adieresis", 556.0),
    ("ae", 889.0),
    ("agrave", 556.0),
    ("amacron", 556.0),
    ("ampersand", 722.0),
    ("aogonek", 556.0),
    ("aring", 556.0),
    ("asciicircum", 584.0),
    ("asciitilde", 584.0),
    ("asterisk", 389.0),
    ("at", 975.0),
    ("atilde", 556.0),
    ("b", 611.0),
    ("backslash", 278.0),
    ("bar", 280.0),
    ("braceleft", 389.0),
    ("braceright", 389.0),
    ("bracketleft", 333.0),
    ("bracketright", 333.0),
    ("breve", 333.0),
    ("brokenbar", 280.0),
    ("bullet", 350.0),
    ("c", 556.0),
    ("cacute", 556.0),
    ("caron", 333.0),
    ("ccaron", 556.0),
    ("ccedilla", 556.0),
    ("cedilla", 333.0),
    ("cent", 556.0),
    ("circumflex", 333.0),
    ("colon", 333.0),
    ("comma", 278.0),
    ("commaaccent", 250.0),
    ("copyright", 737.0),
    ("currency", 556.0),
    ("d", 611.0),
    ("dagger", 556.0),
    ("daggerdbl", 556.0),
    ("dcaron", 743.0),
    ("dcroat", 611.0),
    ("degree", 400.0),
    ("dieresis", 333.0),
    ("divide", 584.0),
    ("dollar", 556.0),
    ("dotaccent", 333.0),
    ("dotlessi", 278.0),
    ("e", 556.0),
    ("eacute", 556.0),
    ("ecaron", 556.0),
    ("ecircumflex", 556.0),
    ("edieresis", 556.0),
    ("edotaccent", 556.0),
    ("egrave", 556.0),
    ("eight", 556.0),
    ("ellipsis", 1000.0),
    ("emacron", 556.0),
    ("emdash", 1000.0),
    ("endash", 556.0),
    ("eogonek", 556.0),
    ("equal", 584.0),
    ("eth", 611.0),
    ("exclam", 333.0),
    ("exclamdown", 333.0),
    ("f", 333.0),
    ("fi", 611.0),
    ("five", 556.0),
    ("fl", 611.0),
    ("florin", 556.0),
    ("four", 556.0),
    ("fraction", 167.0),
    ("g", 611.0),
    ("gbreve", 611.0),
    ("gcommaaccent", 611.0),
    ("germandbls", 611.0),
    ("grave", 333.0),
    ("greater", 584.0),
    ("greaterequal", 549.0),
    ("guillemotleft", 556.0),
    ("guillemotright", 556.0),
    ("guilsinglleft", 333.0),
    ("guilsinglright", 333.0),
    ("h", 611.0),
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
    ("k", 556.0),
    ("kcommaaccent", 556.0),
    ("l", 278.0),
    ("lacute", 278.0),
    ("lcaron", 400.0),
    ("lcommaaccent", 278.0),
    ("less", 584.0),
    ("lessequal", 549.0),
    ("logicalnot", 584.0),
    ("lozenge", 494.0),
    ("lslash", 278.0),
    ("m", 889.0),
    ("macron", 333.0),
    ("minus", 584.0),
    ("mu", 611.0),
    ("multiply", 584.0),
    ("n", 611.0),
    ("nacute", 611.0),
    ("ncaron", 611.0),
    ("ncommaaccent", 611.0),
    ("nine", 556.0),
    ("notequal", 549.0),
    ("ntilde", 611.0),
    ("numbersign", 556.0),
    ("o", 611.0),
    ("oacute", 611.0),
    ("ocircumflex", 611.0),
    ("odieresis", 611.0),
    ("oe", 944.0),
    ("ogonek", 333.0),
    ("ograve", 611.0),
    ("ohungarumlaut", 611.0),
    ("omacron", 611.0),
    ("one", 556.0),
    ("onehalf", 834.0),
    ("onequarter", 834.0),
    ("onesuperior", 333.0),
    ("ordfeminine", 370.0),
    ("ordmasculine", 365.0),
    ("oslash", 611.0),
    ("otilde", 611.0),
    ("p", 611.0),
    ("paragraph", 556.0),
    ("parenleft", 333.0),
    ("parenright", 333.0),
    ("partialdiff", 494.0),
    ("percent", 889.0),
    ("period", 278.0),
    ("periodcentered", 278.0),
    ("perthousand", 1000.0),
    ("plus", 584.0),
    ("plusminus", 584.0),
    ("q", 611.0),
    ("question", 611.0),
    ("questiondown", 611.0),
    ("quotedbl", 474.0),
    ("quotedblbase", 500.0),
    ("quotedblleft", 500.0),
    ("quotedblright", 500.0),
    ("quoteleft", 278.0),
    ("quoteright", 278.0),
    ("quotesinglbase", 278.0),
    ("quotesingle", 238.0),
    ("r", 389.0),
    ("racute", 389.0),
    ("radical", 549.0),
    ("rcaron", 389.0),
    ("rcommaaccent", 389.0),
    ("registered", 737.0),
    ("ring", 333.0),
    ("s", 556.0),
    ("sacute", 556.0),
    ("scaron", 556.0),
    ("scedilla", 556.0),
    ("scommaaccent", 556.0),
    ("section", 556.0),
    ("semicolon", 333.0),
    ("seven", 556.0),
    ("six", 556.0),
    ("slash", 278.0),
    ("space", 278.0),
    ("sterling", 556.0),
    ("summation", 600.0),
    ("t", 333.0),
    ("tcaron", 389.0),
    ("tcommaaccent", 333.0),
    ("thorn", 611.0),
    ("three", 556.0),
    ("threequarters", 834.0),
    ("threesuperior", 333.0),
    ("tilde", 333.0),
    ("trademark", 1000.0),
    ("two", 556.0),
    ("twosuperior", 333.0),
    ("u", 611.0),
    ("uacute", 611.0),
    ("ucircumflex", 611.0),
    ("udieresis", 611.0),
    ("ugrave", 611.0),
    ("uhungarumlaut", 611.0),
    ("umacron", 611.0),
    ("underscore", 556.0),
    ("uogonek", 611.0),
    ("uring", 611.0),
    ("v", 556.0),
    ("w", 778.0),
    ("x", 556.0),
    ("y", 556.0),
    ("yacute", 556.0),
    ("ydieresis", 556.0),
    ("yen", 556.0),
    ("z", 500.0),
    ("zacute", 500.0),
    ("zcaron", 500.0),
    ("zdotaccent", 500.0),
    ("zero", 556.0),
];
