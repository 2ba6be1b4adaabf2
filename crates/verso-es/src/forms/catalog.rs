// Poem form catalog data.

use super::{FormSpec, MeterRule, Stanza};

pub(super) static SONETO: FormSpec = FormSpec {
    id: "soneto",
    name: "Soneto",
    tag: "Clásico · 14 versos",
    description: "La cima de la lírica occidental. Dos cuartetos ABBA seguidos de dos tercetos. \
                  Endecasílabos (11 sílabas).",
    stanzas: &[
        Stanza {
            label: "1.er Cuarteto",
            verses: 4,
            hint: "ABBA · endecasílabos (11 síl.)",
        },
        Stanza {
            label: "2.º Cuarteto",
            verses: 4,
            hint: "ABBA · endecasílabos (11 síl.)",
        },
        Stanza {
            label: "1.er Terceto",
            verses: 3,
            hint: "CDC · endecasílabos",
        },
        Stanza {
            label: "2.º Terceto",
            verses: 3,
            hint: "DCD · endecasílabos",
        },
    ],
    meter: MeterRule::Fixed(11),
};

pub(super) static CUARTETO: FormSpec = FormSpec {
    id: "cuarteto",
    name: "Cuarteto",
    tag: "ABBA · 4 versos",
    description: "Cuatro versos endecasílabos con rima abrazada ABBA. La estrofa más noble de \
                  la métrica española.",
    stanzas: &[Stanza {
        label: "Cuarteto",
        verses: 4,
        hint: "ABBA · endecasílabos (11 síl.)",
    }],
    meter: MeterRule::Fixed(11),
};

pub(super) static TERCETO: FormSpec = FormSpec {
    id: "terceto",
    name: "Terceto",
    tag: "ABA · 3 versos",
    description: "Tres versos endecasílabos con rima ABA. Base de la terza rima italiana y de \
                  los tercetos del soneto.",
    stanzas: &[Stanza {
        label: "Terceto",
        verses: 3,
        hint: "ABA · endecasílabos (11 síl.)",
    }],
    meter: MeterRule::Fixed(11),
};

pub(super) static LIRA: FormSpec = FormSpec {
    id: "lira",
    name: "Lira",
    tag: "7-11-7-7-11 sílabas",
    description: "Cinco versos alternando heptasílabos (7) y endecasílabos (11) con rima aBabB. \
                  Popularizada por Garcilaso.",
    stanzas: &[Stanza {
        label: "Lira",
        verses: 5,
        hint: "7-11-7-7-11 síl. · rima aBabB",
    }],
    meter: MeterRule::Pattern(&[7, 11, 7, 7, 11]),
};

pub(super) static HAIKU: FormSpec = FormSpec {
    id: "haiku",
    name: "Haiku",
    tag: "5 · 7 · 5 sílabas",
    description: "Tres versos que capturan un instante. Origen japonés. Sin rima. Solo imagen \
                  y silencio.",
    stanzas: &[Stanza {
        label: "Haiku",
        verses: 3,
        hint: "5 síl. · 7 síl. · 5 síl. · sin rima",
    }],
    meter: MeterRule::Pattern(&[5, 7, 5]),
};

pub(super) static SILVA: FormSpec = FormSpec {
    id: "silva",
    name: "Silva",
    tag: "Heptasílabos y endecasílabos",
    description: "Combinación libre de versos de 7 y 11 sílabas, con rima a elección del poeta.",
    stanzas: &[Stanza {
        label: "Silva",
        verses: 0,
        hint: "Heptasílabos (7) y endecasílabos (11) · rima libre",
    }],
    meter: MeterRule::OneOf(&[7, 11]),
};

pub(super) static DECIMA: FormSpec = FormSpec {
    id: "decima",
    name: "Décima",
    tag: "Espinela · 10 versos",
    description: "Diez versos octosílabos con rima abbaaccddc. Base del verso popular \
                  latinoamericano y del repentismo.",
    stanzas: &[Stanza {
        label: "Décima (Espinela)",
        verses: 10,
        hint: "abbaaccddc · octosílabos (8 síl.)",
    }],
    meter: MeterRule::Fixed(8),
};

pub(super) static ODA: FormSpec = FormSpec {
    id: "oda",
    name: "Oda",
    tag: "Lírica · estrofas libres",
    description: "Composición lírica de tono elevado dividida en estrofas simétricas. Permite \
                  exaltar personas o sentimientos.",
    stanzas: &[
        Stanza {
            label: "Estrofa 1",
            verses: 4,
            hint: "Versos libres · rima a elección",
        },
        Stanza {
            label: "Estrofa 2",
            verses: 4,
            hint: "Misma estructura que la 1.ª",
        },
        Stanza {
            label: "Estrofa 3",
            verses: 4,
            hint: "Cierre o conclusión lírica",
        },
    ],
    meter: MeterRule::Free,
};

pub(super) static LIBRE: FormSpec = FormSpec {
    id: "libre",
    name: "Verso libre",
    tag: "Sin estructura · libertad total",
    description: "Sin métrica fija, sin rima obligatoria. El ritmo lo decides tú con el corte \
                  de verso y el silencio.",
    stanzas: &[Stanza {
        label: "",
        verses: 0,
        hint: "Sin estructura fija · tu ritmo, tus reglas.",
    }],
    meter: MeterRule::Free,
};
