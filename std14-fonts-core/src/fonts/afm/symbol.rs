//! Symbol advance widths (Symbol.afm).

pub(crate) static WIDTHS: &[(&str, f64)] = &[
    ("Alpha", 722.0),
    ("Beta", 667.0),
    ("Chi", 722.0),
    ("Delta", 612.0),
    ("Epsilon", 611.0),
    ("Eta", 722.0),
    ("Euro", 750.0),
    ("Gamma", 603.0),
    ("Ifraktur", 686.0),
    ("Iota", 333.0),
    ("Kappa", 722.0),
    ("Lambda", 686.0),
    ("Mu", 889.0),
    ("Nu", 722.0),
    ("Omega", 768.0),
    ("Omicron", 722.0),
    ("Phi", 763.0),
    ("Pi", 768.0),
    ("Psi", 795.0),
    ("Rfraktur", 795.0),
    ("Rho", 556.0),
    ("Sigma", 592.0),
    ("Tau", 611.0),
    ("Theta", 741.0),
    ("Upsilon", 690.0),
    ("Upsilon1", 620.0),
    ("Xi", 645.0),
    ("Zeta", 611.0),
    ("aleph", 823.0),
    ("alpha", 631.0),
    ("ampersand", 778.0),
    ("angle", 768.0),
    ("angleleft", 329.0),
    ("angleright", 329.0),
    ("apple", 790.0),
    ("approxequal", 549.0),
    ("arrowboth", 1042.0),
    ("arrowdblboth", 1042.0),
    ("arrowdbldown", 603.0),
    ("arrowdblleft", 987.0),
    ("arrowdblright", 987.0),
    ("arrowdblup", 603.0),
    ("arrowdown", 603.0),
    ("arrowhorizex", 1000.0),
    ("arrowleft", 987.0),
    ("arrowright", 987.0),
    ("arrowup", 603.0),
    ("arrowvertex", 603.0),
    ("asteriskmath", 500.0),
    ("bar", 200.0),
    ("beta", 549.0),
    ("braceex", 494.0),
    ("braceleft", 480.0),
    ("braceleftbt", 494.0),
    ("braceleftmid", 494.0),
    ("bracelefttp", 494.0),
    ("braceright", 480.0),
    ("bracerightbt", 494.0),
    ("bracerightmid", 494.0),
    ("bracerighttp", 494.0),
    ("bracketleft", 333.0),
    ("bracketleftbt", 384.0),
    ("bracketleftex", 384.0),
    ("bracketlefttp", 384.0),
    ("bracketright", 333.0),
    ("bracketrightbt", 384.0),
    ("bracketrightex", 384.0),
    ("bracketrighttp", 384.0),
    ("bullet", 460.0),
    ("carriagereturn", 658.0),
    ("chi", 549.0),
    ("circlemultiply", 768.0),
    ("circleplus", 768.0),
    ("club", 753.0),
    ("colon", 278.0),
    ("comma", 250.0),
    ("congruent", 549.0),
    ("copyrightsans", 790.0),
    ("copyrightserif", 790.0),
    ("degree", 400.0),
    ("delta", 494.0),
    ("diamond", 753.0),
    ("divide", 549.0),
    ("dotmath", 250.0),
    ("eight", 500.0),
    ("element", 713.0),
    ("ellipsis", 1000.0),
    ("emptyset", 823.0),
    ("epsilon", 439.0),
    ("equal", 549.0),
    ("equivalence", 549.0),
    ("eta", 603.0),
    ("exclam", 333.0),
    ("existential", 549.0),
    ("five", 500.0),
    ("florin", 500.0),
    ("four", 500.0),
    ("fraction", 167.0),
    ("gamma", 411.0),
    ("gradient", 713.0),
    ("greater", 549.0),
    ("greaterequal", 549.0),
    ("heart", 753.0),
    ("infinity", 713.0),
    ("integral", 274.0),
    ("integralbt", 686.0),
    ("integralex", 686.0),
    ("integraltp", 686.0),
    ("intersection", 768.0),
    ("iota", 329.0),
    ("kappa", 549.0),
    ("lambda", 549.0),
    ("less", 549.0),
    ("lessequal", 549.0),
    ("logicaland", 603.0),
    ("logicalnot", 713.0),
    ("logicalor", 603.0),
    ("lozenge", 494.0),
    ("minus", 549.0),
    ("minute", 247.0),
    ("mu", 576.0),
    ("multiply", 549.0),
    ("nine", 500.0),
    ("notelement", 713.0),
    ("notequal", 549.0),
    ("notsubset", 713.0),
    ("nu", 521.0),
    ("numbersign", 500.0),
    ("omega", 686.0),
    ("omega1", 713.0),
    ("omicron", 549.0),
    ("one", 500.0),
    ("parenleft", 333.0),
    ("parenleftbt", 384.0),
    ("parenleftex", 384.0),
    ("parenlefttp", 384.0),
    ("parenright", 333.0),
    ("parenrightbt", 384.0),
    ("parenrightex", 384.0),
    ("parenrighttp", 384.0),
    ("partialdiff", 494.0),
    ("percent", 833.0),
    ("period", 250.0),
    ("perpendicular", 658.0),
    ("phi", 521.0),
    ("phi1", 603.0),
    ("pi", 549.0),
    ("plus", 549.0),
    ("plusminus", 549.0),
    ("product", 823.0),
    ("propersubset", 713.0),
    ("propersuperset", 713.0),
    ("proportional", 713.0),
    ("psi", 686.0),
    ("question", 444.0),
    ("radical", 549.0),
    ("radicalex", 500.0),
    ("reflexsubset", 713.0),
    ("reflexsuperset", 713.0),
    ("registersans", 790.0),
    ("registerserif", 790.0),
    ("rho", 549.0),
    ("second", 411.0),
    ("semicolon", 278.0),
    ("seven", 500.0),
    ("sigma", 603.0),
    ("sigma1", 439.0),
    ("similar", 549.0),
    ("six", 500.0),
    ("slash", 278.0),
    ("space", 250.0),
    ("spade", 753.0),
    ("suchthat", 439.0),
    ("summation", 713.0),
    ("tau", 439.0),
    ("therefore", 863.0),
    ("theta", 521.0),
    ("theta1", 631.0),
    ("three", 500.0),
    ("trademarksans", 786.0),
    ("trademarkserif", 890.0),
    ("two", 500.0),
    ("underscore", 500.0),
    ("union", 768.0),
    ("universal", 713.0),
    ("upsilon", 576.0),
    ("weierstrass", 987.0),
    ("xi", 493.0),
    ("zero", 500.0),
    ("zeta", 494.0),
];
