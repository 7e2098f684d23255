//! Helvetica and Helvetica-Oblique advance widths (Helvetica.afm, Helvetica-Oblique.afm).

pub(crate) static WIDTHS: &[(&str, f64)] = &[
    ("A", 667.0),
    ("AE", 1000.0),
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
    ("J", 500.0),
    ("K", 667.0),
    ("Kcommaaccent", 667.0),
    ("L", 556.0),
    ("Lacute", 556.0),
    ("Lcaron", 556.0),
    ("Lcommaaccent", 556.0),
    ("Lslash", 556.0),
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
    ("ampersand", 667.0),
    ("aogonek", 556.0),
    ("aring", 556.0),
    ("asciicircum", 469.0),
    ("asciitilde", 584.0),
    ("asterisk", 389.0),
    ("at", 1015.0),
    ("atilde", 556.0),
    ("b", 556.0),
    ("backslash", 278.0),
    ("bar", 260.0),
    ("braceleft", 334.0),
    ("braceright", 334.0),
    ("bracketleft", 278.0),
    ("bracketright", 278.0),
    ("breve", 333.0),
    ("brokenbar", 260.0),
    ("bullet", 350.0),
    ("c", 500.0),
    ("cacute", 500.0),
    ("caron", 333.0),
    ("ccaron", 500.0),
    ("ccedilla", 500.0),
    ("cedilla", 333.0),
    ("cent", 556.0),
    ("circumflex", 333.0),
    ("colon", 278.0),
    ("comma", 278.0),
    ("commaaccent", 250.0),
    ("copyright", 737.0),
    ("currency", 556.0),
    ("d", 556.0),
    ("dagger", 556.0),
    ("daggerdbl", 556.0),
    ("dcaron", 643.0),
    ("dcroat", 556.0),
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
    ("eth", 556.0),
    ("exclam", 278.0),
    ("exclamdown", 333.0),
    ("f", 278.0),
    ("fi", 500.0),
    ("five", 556.0),
    ("fl", 500.0),
    ("florin", 556.0),
    ("four", 556.0),
    ("fraction", 167.0),
    ("g", 556.0),
    ("gbreve", 556.0),
    ("gcommaaccent", 556.0),
    ("germandbls", 611.0),
    ("grave", 333.0),
    ("greater", 584.0),
    ("greaterequal", 549.0),
    ("guillemotleft", 556.0),
    ("guillemotright", 556.0),
    ("guilsinglleft", 333.0),
    ("guilsinglright", 333.0),
    ("h", 556.0),
    ("hungarumlaut", 333.0),
    ("hyphen", 333.0),
    ("i", 222.0),
    ("iacute", 278.0),
    ("icircumflex", 278.0),
    ("idieresis", 278.0),
    ("igrave", 278.0),
    ("imacron", 278.0),
    ("iogonek", 222.0),
    ("j", 222.0),
    ("k", 500.0),
    ("kcommaaccent", 500.0),
    ("l", 222.0),
    ("lacute", 222.0),
    ("lcaron", 299.0),
    ("lcommaaccent", 222.0),
    ("less", 584.0),
    ("lessequal", 549.0),
    ("logicalnot", 584.0),
    ("lozenge", 471.0),
    ("lslash", 222.0),
    ("m", 833.0),
    ("macron", 333.0),
    ("minus", 584.0),
    ("mu", 556.0),
    ("multiply", 584.0),
    ("n", 556.0),
    ("nacute", 556.0),
    ("ncaron", 556.0),
    ("ncommaaccent", 556.0),
    ("nine", 556.0),
    ("notequal", 549.0),
    ("ntilde", 556.0),
    ("numbersign", 556.0),
    ("o", 556.0),
    ("oacute", 556.0),
    ("ocircumflex", 556.0),
    ("odieresis", 556.0),
    ("oe", 944.0),
    ("ogonek", 333.0),
    ("ograve", 556.0),
    ("ohungarumlaut", 556.0),
    ("omacron", 556.0),
    ("one", 556.0),
    ("onehalf", 834.0),
    ("onequarter", 834.0),
    ("onesuperior", 333.0),
    ("ordfeminine", 370.0),
    ("ordmasculine", 365.0),
    ("oslash", 611.0),
    ("otilde", 556.0),
    ("p", 556.0),
    ("paragraph", 537.0),
    ("parenleft", 333.0),
    ("parenright", 333.0),
    ("partialdiff", 476.0),
    ("percent", 889.0),
    ("period", 278.0),
    ("periodcentered", 278.0),
    ("perthousand", 1000.0),
    ("plus", 584.0),
    ("plusminus", 584.0),
    ("q", 556.0),
    ("question", 556.0),
    ("questiondown", 611.0),
    ("quotedbl", 355.0),
    ("quotedblbase", 333.0),
    ("quotedblleft", 333.0),
    ("quotedblright", 333.0),
    ("quoteleft", 222.0),
    ("quoteright", 222.0),
    ("quotesinglbase", 222.0),
    ("quotesingle", 191.0),
    ("r", 333.0),
    ("racute", 333.0),
    ("radical", 453.0),
    ("rcaron", 333.0),
    ("rcommaaccent", 333.0),
    ("registered", 737.0),
    ("ring", 333.0),
    ("s", 500.0),
    ("sacute", 500.0),
    ("scaron", 500.0),
    ("scedilla", 500.0),
    ("scommaaccent", 500.0),
    ("section", 556.0),
    ("semicolon", 278.0),
    ("seven", 556.0),
    ("six", 556.0),
    ("slash", 278.0),
    ("space", 278.0),
    ("sterling", 556.0),
    ("summation", 600.0),
    ("t", 278.0),
    ("tcaron", 317.0),
    ("tcommaaccent", 278.0),
    ("thorn", 556.0),
    ("three", 556.0),
    ("threequarters", 834.0),
    ("threesuperior", 333.0),
    ("tilde", 333.0),
    ("trademark", 1000.0),
    ("two", 556.0),
    ("twosuperior", 333.0),
    ("u", 556.0),
    ("uacute", 556.0),
    ("ucircumflex", 556.0),
    ("udieresis", 556.0),
    ("ugrave", 556.0),
    ("uhungarumlaut", 556.0),
    ("umacron", 556.0),
    ("underscore", 556.0),
    ("uogonek", 556.0),
    ("uring", 556.0),
    ("v", 500.0),
    ("w", 722.0),
    ("x", 500.0),
    ("y", 500.0),
    ("yacute", 500.0),
    ("ydieresis", 500.0),
    ("yen", 556.0),
    ("z", 500.0),
    ("zacute", 500.0),
    ("zcaron", 500.0),
    ("zdotaccent", 500.0),
    ("zero", 556.0),
];
