// Static copy for the landing page. Plain records only; the page decides
// how they look.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Card {
    pub title: &'static str,
    pub text: &'static str,
    pub icon: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PriceRow {
    pub label: &'static str,
    pub level: &'static str,
    pub level_class: &'static str,
    pub price: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Catalog {
    pub id: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub items: &'static [Card],
}

pub const PROBLEMS: &[Card] = &[
    Card {
        title: "Erros humanos",
        text: "Informações digitadas de forma inconsistente geram retrabalho e perda de confiança.",
        icon: "fa-triangle-exclamation",
    },
    Card {
        title: "Baixa visibilidade",
        text: "Sem rastreabilidade, o gestor não sabe onde o processo parou ou quem aprovou.",
        icon: "fa-eye-slash",
    },
    Card {
        title: "Escala bloqueada",
        text: "A equipe cresce, mas o volume cresce mais rápido. O gargalo vira custo fixo.",
        icon: "fa-chart-line",
    },
];

pub const KPIS: &[Card] = &[
    Card { title: "-42%", text: "Redução de custo operacional", icon: "fa-chart-line" },
    Card { title: "+3x", text: "Velocidade de processamento", icon: "fa-bolt" },
    Card { title: "99,9%", text: "Precisão em dados críticos", icon: "fa-bullseye" },
    Card { title: "24/7", text: "Monitoramento ativo", icon: "fa-robot" },
];

pub const METHOD_STEPS: &[Card] = &[
    Card { title: "Descobrir", text: "Imersão no processo e desenho do ROI.", icon: "fa-magnifying-glass" },
    Card { title: "Construir", text: "Integrações, IA e regras de negócio em semanas.", icon: "fa-hammer" },
    Card { title: "Escalar", text: "Automação monitorada e evolutiva com SLA.", icon: "fa-chart-line" },
];

pub const CATALOGS: &[Catalog] = &[
    Catalog {
        id: "catalogo-entradas",
        title: "Catálogo de entradas",
        subtitle: "De onde os dados chegam.",
        items: &[
            Card { title: "WhatsApp", text: "Mensagens, áudios e anexos.", icon: "fa-whatsapp" },
            Card { title: "E-mail", text: "Caixas monitoradas com regras.", icon: "fa-envelope" },
            Card { title: "PDF", text: "Notas, contratos e relatórios.", icon: "fa-file-pdf" },
        ],
    },
    Catalog {
        id: "catalogo-processamento",
        title: "Catálogo de processamento",
        subtitle: "O que acontece no meio do caminho.",
        items: &[
            Card { title: "Extração com IA", text: "Campos estruturados a partir de texto livre.", icon: "fa-brain" },
            Card { title: "Validação", text: "Regras de negócio e conferência cruzada.", icon: "fa-check" },
        ],
    },
    Catalog {
        id: "catalogo-saidas",
        title: "Catálogo de saídas",
        subtitle: "Para onde o resultado vai.",
        items: &[
            Card { title: "ERP", text: "Lançamentos automáticos.", icon: "fa-database" },
            Card { title: "Alertas", text: "Avisos no canal certo.", icon: "fa-bell" },
        ],
    },
];

pub const INTEGRATION_ROWS: &[PriceRow] = &[
    PriceRow { label: "Planilha / CSV", level: "Baixa", level_class: "badge-low", price: "R$ 1k – 2k" },
    PriceRow { label: "API REST documentada", level: "Média", level_class: "badge-mid", price: "R$ 2k – 4k" },
    PriceRow { label: "ERP legado sem API", level: "Alta", level_class: "badge-high", price: "R$ 6k – 10k" },
    PriceRow { label: "Integração sob medida", level: "Variável", level_class: "badge-mid", price: "Sob consulta" },
];

pub const CAPTURE_ROWS: &[PriceRow] = &[
    PriceRow { label: "Formulário web", level: "Baixa", level_class: "badge-low", price: "R$ 1k" },
    PriceRow { label: "WhatsApp", level: "Média", level_class: "badge-mid", price: "R$ 2k – 3k" },
    PriceRow { label: "PDF com IA", level: "Alta", level_class: "badge-high", price: "R$ 3,5k – 6k" },
];

pub const FAQ: &[FaqEntry] = &[
    FaqEntry {
        question: "Em quanto tempo conseguimos colocar no ar?",
        answer: "Projetos de menor complexidade entram em produção entre 3 e 6 semanas, com etapas semanais e validações junto ao time.",
    },
    FaqEntry {
        question: "Funciona em celular e desktop?",
        answer: "Sim. O site foi modernizado com layout responsivo, rolagem suave e sessões clicáveis tanto no mobile quanto no PC.",
    },
    FaqEntry {
        question: "Preciso ter API pronta?",
        answer: "Não necessariamente. Podemos operar com API, arquivos, banco e até estratégia híbrida conforme o cenário.",
    },
];
