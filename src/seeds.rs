//! Built-in catalog content: exam sources, subject labels, covered years and questions.
//!
//! Tables are authored as `&'static` definitions and converted to owned domain
//! values on demand, so the catalog can merge them with bank entries.

use crate::domain::{AnswerOption, Difficulty, Question, SourceDescriptor};

/// Years the statistics are keyed by.
pub const COVERED_YEARS: [u16; 5] = [2020, 2021, 2022, 2023, 2024];

#[derive(Clone, Copy)]
struct SourceDef {
  id: &'static str,
  label: &'static str,
  description: &'static str,
  color: &'static str,
  coverage: &'static str,
}

#[derive(Clone, Copy)]
struct QuestionDef {
  id: &'static str,
  source: &'static str,
  source_label: &'static str,
  year: u16,
  number: u32,
  subject: &'static str,
  topic: &'static str,
  difficulty: Difficulty,
  text: &'static str,
  options: &'static [(&'static str, &'static str)], // (letter, text)
  correct_answer: &'static str,
  explanation: &'static str,
}

macro_rules! question {
  (
    $id:expr, $source:expr, $label:expr, $year:expr, $number:expr,
    $subject:expr, $topic:expr, $difficulty:ident,
    $text:expr,
    [$(($letter:expr, $opt:expr)),* $(,)?],
    $answer:expr,
    $explanation:expr $(,)?
  ) => {
    QuestionDef {
      id: $id,
      source: $source,
      source_label: $label,
      year: $year,
      number: $number,
      subject: $subject,
      topic: $topic,
      difficulty: Difficulty::$difficulty,
      text: $text,
      options: &[$(($letter, $opt)),*],
      correct_answer: $answer,
      explanation: $explanation,
    }
  };
}

const SOURCES: &[SourceDef] = &[
  SourceDef { id: "ENEM", label: "ENEM", description: "Exame Nacional do Ensino Médio", color: "text-blue-500", coverage: "Ciências da Natureza" },
  SourceDef { id: "FUVEST", label: "FUVEST/USP", description: "Fundação Universitária para o Vestibular", color: "text-yellow-500", coverage: "Biologia, Química, Física" },
  SourceDef { id: "SANTA_CASA", label: "Santa Casa SP", description: "Faculdade de Ciências Médicas da Santa Casa de SP", color: "text-red-500", coverage: "Biologia, Química" },
  SourceDef { id: "UNIVAG", label: "UNIVAG", description: "Centro Universitário de Várzea Grande", color: "text-green-500", coverage: "Ciências da Natureza" },
  SourceDef { id: "PUC_SP", label: "PUC-SP", description: "Pontifícia Universidade Católica de SP", color: "text-purple-500", coverage: "Biologia, Química" },
  SourceDef { id: "EINSTEIN", label: "Einstein", description: "Faculdade Israelita de Ciências da Saúde Albert Einstein", color: "text-cyan-500", coverage: "Ciências da Natureza" },
  SourceDef { id: "UNICAMP", label: "UNICAMP", description: "Universidade Estadual de Campinas", color: "text-orange-500", coverage: "Biologia, Química" },
  SourceDef { id: "UNIFESP", label: "UNIFESP", description: "Universidade Federal de São Paulo", color: "text-teal-500", coverage: "Biologia, Química" },
];

// Coarse subjects and fine topics share this list.
const SUBJECTS: &[&str] = &[
  "Biologia", "Química", "Física", "Biologia Celular", "Genética",
  "Ecologia", "Fisiologia Humana", "Anatomia", "Bioquímica",
  "Microbiologia", "Evolução", "Botânica", "Zoologia",
  "Química Orgânica", "Química Inorgânica", "Físico-Química",
];

const QUESTIONS: &[QuestionDef] = &[
  // ENEM 2024
  question!(
    "ENEM_2024_Q01", "ENEM", "ENEM 2024", 2024, 1,
    "Biologia", "Sistema Imunológico", Medium,
    "As vacinas de mRNA, como as desenvolvidas contra a COVID-19, utilizam uma molécula de RNA mensageiro sintético que codifica a proteína spike do vírus. Após a injeção, as células do corpo humano utilizam esse mRNA para produzir a proteína viral, que é então reconhecida pelo sistema imunológico. Esse processo resulta na produção de anticorpos específicos e células de memória. Com base nesse mecanismo, é correto afirmar que as vacinas de mRNA:",
    [
      ("A", "Inserem o vírus atenuado no organismo para estimular a resposta imune."),
      ("B", "Utilizam a maquinaria celular do hospedeiro para sintetizar antígenos virais."),
      ("C", "Alteram permanentemente o DNA das células humanas ao integrar o mRNA viral."),
      ("D", "Estimulam apenas a imunidade inata, sem formação de memória imunológica."),
      ("E", "Funcionam como antibióticos, destruindo diretamente as partículas virais."),
    ],
    "B",
    "As vacinas de mRNA utilizam a maquinaria de tradução (ribossomos) das células do hospedeiro para sintetizar a proteína spike, que funciona como antígeno. Não há inserção de vírus (A), não alteram o DNA (C), estimulam imunidade adaptativa com memória (D), e não são antibióticos (E)."
  ),
  question!(
    "ENEM_2024_Q02", "ENEM", "ENEM 2024", 2024, 2,
    "Biologia", "Genética", Easy,
    "A anemia falciforme é uma doença genética autossômica recessiva causada por uma mutação pontual no gene da beta-globina, resultando na substituição do ácido glutâmico por valina na posição 6 da cadeia proteica. Indivíduos heterozigotos (HbAS) apresentam o traço falciforme e possuem vantagem seletiva em regiões endêmicas de malária. Em um casal em que ambos são heterozigotos para o gene da hemoglobina S, a probabilidade de terem um filho com anemia falciforme é:",
    [
      ("A", "100%"),
      ("B", "75%"),
      ("C", "50%"),
      ("D", "25%"),
      ("E", "0%"),
    ],
    "D",
    "Cruzamento HbAS x HbAS: 1/4 HbAA (normal), 2/4 HbAS (traço), 1/4 HbSS (anemia falciforme). Portanto, 25% de chance de ter anemia falciforme."
  ),
  question!(
    "ENEM_2024_Q03", "ENEM", "ENEM 2024", 2024, 3,
    "Biologia", "Ecologia", Medium,
    "O desmatamento da Amazônia tem impacto direto no ciclo hidrológico da região. As árvores da floresta amazônica liberam grandes quantidades de vapor d'água para a atmosfera através da evapotranspiração, formando os chamados \"rios voadores\" que transportam umidade para o Centro-Sul do Brasil. A remoção da cobertura vegetal nessa região pode resultar em:",
    [
      ("A", "Aumento da precipitação no Centro-Sul devido à maior exposição do solo."),
      ("B", "Redução da umidade atmosférica e diminuição das chuvas em regiões distantes."),
      ("C", "Aumento da biodiversidade local pela criação de novos habitats."),
      ("D", "Melhoria na qualidade do solo devido à maior incidência solar direta."),
      ("E", "Estabilização do clima regional pela redução do efeito estufa local."),
    ],
    "B",
    "A evapotranspiração da floresta amazônica é responsável por grande parte da umidade que forma os \"rios voadores\". O desmatamento reduz essa evapotranspiração, diminuindo a umidade atmosférica e as chuvas em regiões distantes como o Centro-Sul do Brasil."
  ),
  question!(
    "ENEM_2024_Q04", "ENEM", "ENEM 2024", 2024, 4,
    "Química", "Bioquímica", Hard,
    "As enzimas são catalisadores biológicos que aceleram reações químicas nos organismos vivos. A velocidade de uma reação enzimática depende de diversos fatores, incluindo a concentração do substrato, a temperatura e o pH do meio. O modelo de Michaelis-Menten descreve a cinética enzimática e define a constante Km como a concentração de substrato na qual a velocidade da reação atinge metade da velocidade máxima (Vmáx). Sobre a cinética enzimática, é correto afirmar que:",
    [
      ("A", "Um valor baixo de Km indica baixa afinidade da enzima pelo substrato."),
      ("B", "A velocidade da reação continua aumentando indefinidamente com o aumento do substrato."),
      ("C", "Inibidores competitivos aumentam o Km aparente sem alterar a Vmáx."),
      ("D", "A desnaturação enzimática por calor é sempre reversível."),
      ("E", "Todas as enzimas requerem cofatores metálicos para funcionar."),
    ],
    "C",
    "Inibidores competitivos competem com o substrato pelo sítio ativo, aumentando o Km aparente (necessita mais substrato para atingir Vmáx/2), mas a Vmáx pode ser alcançada com excesso de substrato. Km baixo = alta afinidade (A errada). A velocidade atinge platô em Vmáx (B errada). Desnaturação por calor geralmente é irreversível (D errada). Nem todas enzimas precisam de cofatores (E errada)."
  ),
  question!(
    "ENEM_2024_Q05", "ENEM", "ENEM 2024", 2024, 5,
    "Biologia", "Fisiologia Humana", Medium,
    "O sistema nervoso autônomo (SNA) regula funções involuntárias do corpo humano e é dividido em simpático e parassimpático. Durante uma situação de estresse agudo (\"luta ou fuga\"), o sistema nervoso simpático é ativado, liberando noradrenalina e adrenalina. Os efeitos fisiológicos dessa ativação incluem:",
    [
      ("A", "Diminuição da frequência cardíaca e aumento do peristaltismo intestinal."),
      ("B", "Broncoconstrição e aumento da secreção salivar."),
      ("C", "Aumento da frequência cardíaca, broncodilatação e midríase."),
      ("D", "Diminuição da pressão arterial e aumento da diurese."),
      ("E", "Miose, bradicardia e aumento da motilidade gástrica."),
    ],
    "C",
    "A ativação simpática (\"luta ou fuga\") causa: taquicardia (aumento da FC), broncodilatação (mais O2), midríase (pupilas dilatadas), aumento da PA, diminuição do peristaltismo, e redistribuição do fluxo sanguíneo para músculos."
  ),

  // ENEM 2023
  question!(
    "ENEM_2023_Q01", "ENEM", "ENEM 2023", 2023, 1,
    "Biologia", "Biologia Celular", Medium,
    "A mitocôndria é uma organela essencial para a produção de energia celular através da fosforilação oxidativa. Essa organela possui seu próprio DNA (mtDNA), que é herdado exclusivamente pela via materna. A cadeia de transporte de elétrons, localizada na membrana interna mitocondrial, é composta por quatro complexos proteicos (I, II, III e IV) e a ATP sintase (complexo V). O gradiente de prótons gerado pela cadeia transportadora é utilizado pela ATP sintase para produzir ATP. A principal função da cadeia de transporte de elétrons é:",
    [
      ("A", "Produzir NADH e FADH2 a partir da glicose."),
      ("B", "Converter piruvato em acetil-CoA."),
      ("C", "Gerar um gradiente eletroquímico de prótons para síntese de ATP."),
      ("D", "Realizar a glicólise anaeróbica no citoplasma."),
      ("E", "Sintetizar proteínas a partir do mtDNA."),
    ],
    "C",
    "A cadeia de transporte de elétrons bombeia prótons (H+) da matriz para o espaço intermembranar, criando um gradiente eletroquímico. A ATP sintase usa esse gradiente para sintetizar ATP (quimiosmose)."
  ),
  question!(
    "ENEM_2023_Q02", "ENEM", "ENEM 2023", 2023, 2,
    "Biologia", "Evolução", Easy,
    "Charles Darwin e Alfred Russel Wallace propuseram independentemente a teoria da seleção natural como mecanismo principal da evolução biológica. Segundo essa teoria, os organismos que possuem características mais vantajosas em determinado ambiente têm maior probabilidade de sobreviver e se reproduzir, transmitindo essas características às gerações seguintes. Um exemplo clássico de seleção natural é o caso das mariposas de Manchester durante a Revolução Industrial. Nesse contexto, a seleção natural:",
    [
      ("A", "Cria novas mutações genéticas em resposta às mudanças ambientais."),
      ("B", "Atua sobre a variabilidade genética pré-existente na população."),
      ("C", "Garante que todos os indivíduos de uma espécie evoluam igualmente."),
      ("D", "É o único mecanismo evolutivo existente."),
      ("E", "Sempre resulta em aumento da complexidade dos organismos."),
    ],
    "B",
    "A seleção natural atua sobre a variabilidade genética já existente na população, favorecendo os indivíduos com características mais adaptadas ao ambiente. Ela não cria mutações (A), não é uniforme (C), não é o único mecanismo (D — há deriva genética, migração, etc.), e não necessariamente aumenta complexidade (E)."
  ),

  // ENEM 2022
  question!(
    "ENEM_2022_Q01", "ENEM", "ENEM 2022", 2022, 1,
    "Biologia", "Microbiologia", Medium,
    "A resistência bacteriana aos antibióticos é considerada uma das maiores ameaças à saúde pública mundial pela OMS. O uso indiscriminado de antibióticos na medicina humana, veterinária e na agropecuária contribui para a seleção de bactérias resistentes. Os mecanismos de resistência incluem a produção de enzimas que degradam o antibiótico (como as beta-lactamases), alteração do alvo molecular, bombas de efluxo e redução da permeabilidade da membrana. Sobre a resistência bacteriana, é correto afirmar que:",
    [
      ("A", "Os antibióticos causam as mutações que conferem resistência às bactérias."),
      ("B", "A resistência é transmitida apenas verticalmente, de célula-mãe para célula-filha."),
      ("C", "O uso de antibióticos seleciona as bactérias que já possuem genes de resistência."),
      ("D", "A resistência bacteriana é um fenômeno recente, surgido após a descoberta da penicilina."),
      ("E", "Bactérias Gram-positivas são naturalmente resistentes a todos os antibióticos."),
    ],
    "C",
    "Os antibióticos não causam mutações — eles selecionam bactérias que já possuem genes de resistência (pré-existentes). A resistência pode ser transferida horizontalmente por conjugação, transformação ou transdução (B errada). Genes de resistência existem há milhões de anos (D errada)."
  ),

  // ENEM 2021
  question!(
    "ENEM_2021_Q01", "ENEM", "ENEM 2021", 2021, 1,
    "Biologia", "Genética", Medium,
    "A técnica CRISPR-Cas9 revolucionou a engenharia genética ao permitir a edição precisa do DNA de qualquer organismo. O sistema utiliza uma molécula de RNA-guia (gRNA) que direciona a enzima Cas9 para uma sequência específica do DNA, onde realiza um corte na dupla fita. Após o corte, os mecanismos de reparo celular podem ser explorados para inserir, deletar ou modificar genes. Essa tecnologia tem aplicações potenciais em:",
    [
      ("A", "Apenas em organismos procariontes, onde foi originalmente descoberta."),
      ("B", "Terapia gênica, melhoramento genético de plantas e pesquisa biomédica."),
      ("C", "Substituição completa do genoma de um organismo por outro."),
      ("D", "Criação de novos elementos químicos a partir da modificação do DNA."),
      ("E", "Eliminação de todas as doenças genéticas em uma única geração."),
    ],
    "B",
    "CRISPR-Cas9 tem aplicações em terapia gênica (correção de mutações causadoras de doenças), melhoramento genético de plantas (resistência a pragas, maior produtividade) e pesquisa biomédica (modelos animais, estudo de genes). Funciona em eucariontes e procariontes (A errada)."
  ),

  // ENEM 2020
  question!(
    "ENEM_2020_Q01", "ENEM", "ENEM 2020", 2020, 1,
    "Biologia", "Fisiologia Humana", Easy,
    "O sistema endócrino humano é composto por glândulas que produzem hormônios responsáveis pela regulação de diversas funções corporais. A insulina, produzida pelas células beta das ilhotas de Langerhans no pâncreas, é fundamental para o metabolismo da glicose. No diabetes mellitus tipo 2, ocorre resistência à ação da insulina nos tecidos periféricos. A principal consequência metabólica dessa resistência é:",
    [
      ("A", "Hipoglicemia crônica por excesso de captação de glicose."),
      ("B", "Hiperglicemia por redução da captação de glicose pelas células."),
      ("C", "Aumento da síntese de glicogênio hepático."),
      ("D", "Diminuição da produção de insulina pelo pâncreas."),
      ("E", "Aumento da sensibilidade dos receptores de insulina."),
    ],
    "B",
    "No DM2, a resistência à insulina impede que as células captem glicose adequadamente, resultando em hiperglicemia (glicose elevada no sangue). Inicialmente, o pâncreas compensa produzindo mais insulina (hiperinsulinemia), mas com o tempo pode haver falência das células beta."
  ),

  // FUVEST/USP 2024
  question!(
    "FUVEST_2024_Q01", "FUVEST", "FUVEST/USP 2024", 2024, 1,
    "Biologia", "Biologia Celular", Hard,
    "A apoptose é um processo de morte celular programada essencial para o desenvolvimento embrionário, a homeostase tecidual e a eliminação de células danificadas ou infectadas. Diferentemente da necrose, a apoptose é um processo ordenado que envolve a ativação de caspases, fragmentação do DNA e formação de corpos apoptóticos. Sobre a apoptose, é INCORRETO afirmar que:",
    [
      ("A", "É um processo que requer gasto de energia (ATP)."),
      ("B", "Desencadeia resposta inflamatória intensa no tecido adjacente."),
      ("C", "Pode ser ativada por vias intrínsecas (mitocondrial) e extrínsecas (receptores de morte)."),
      ("D", "A desregulação da apoptose está associada ao desenvolvimento de câncer."),
      ("E", "Os corpos apoptóticos são fagocitados por macrófagos sem causar inflamação."),
    ],
    "B",
    "A apoptose NÃO desencadeia resposta inflamatória — essa é uma característica da necrose. Na apoptose, os corpos apoptóticos são rapidamente fagocitados sem liberação de conteúdo intracelular, evitando inflamação. As demais alternativas estão corretas."
  ),
  question!(
    "FUVEST_2024_Q02", "FUVEST", "FUVEST/USP 2024", 2024, 2,
    "Biologia", "Genética", Hard,
    "A epigenética estuda modificações hereditárias na expressão gênica que não envolvem alterações na sequência do DNA. Os principais mecanismos epigenéticos incluem a metilação do DNA, modificações de histonas e RNA não-codificante. A metilação de ilhas CpG em regiões promotoras de genes geralmente resulta em:",
    [
      ("A", "Ativação da transcrição do gene."),
      ("B", "Silenciamento da expressão gênica."),
      ("C", "Aumento da taxa de mutação."),
      ("D", "Duplicação do gene."),
      ("E", "Translocação cromossômica."),
    ],
    "B",
    "A metilação de ilhas CpG em regiões promotoras recruta proteínas que compactam a cromatina (heterocromatina), impedindo o acesso dos fatores de transcrição e resultando no silenciamento gênico. É um mecanismo importante na inativação do cromossomo X e no imprinting genômico."
  ),
  question!(
    "FUVEST_2024_Q03", "FUVEST", "FUVEST/USP 2024", 2024, 3,
    "Química", "Química Orgânica", Easy,
    "Os aminoácidos são as unidades monoméricas das proteínas e possuem um grupo amino (-NH2), um grupo carboxila (-COOH), um hidrogênio e uma cadeia lateral (R) ligados ao carbono alfa. Em pH fisiológico (7,4), a maioria dos aminoácidos existe na forma de íon dipolar (zwitterion). A ligação peptídica que une dois aminoácidos é formada por:",
    [
      ("A", "Uma reação de adição entre os grupos amino."),
      ("B", "Uma reação de condensação entre o grupo amino de um e o grupo carboxila de outro, com liberação de água."),
      ("C", "Uma ligação iônica entre cargas opostas dos aminoácidos."),
      ("D", "Uma ponte dissulfeto entre as cadeias laterais."),
      ("E", "Uma ligação de hidrogênio entre os grupos R."),
    ],
    "B",
    "A ligação peptídica é uma ligação covalente formada por uma reação de condensação (desidratação) entre o grupo amino (-NH2) de um aminoácido e o grupo carboxila (-COOH) de outro, com liberação de uma molécula de água (H2O)."
  ),

  // FUVEST/USP 2023
  question!(
    "FUVEST_2023_Q01", "FUVEST", "FUVEST/USP 2023", 2023, 1,
    "Biologia", "Fisiologia Humana", Hard,
    "O sistema renina-angiotensina-aldosterona (SRAA) é um dos principais mecanismos de regulação da pressão arterial. Quando há queda da pressão arterial, as células justaglomerulares do rim liberam renina, que converte o angiotensinogênio em angiotensina I. A enzima conversora de angiotensina (ECA), presente principalmente nos pulmões, converte a angiotensina I em angiotensina II. Os efeitos da angiotensina II incluem:",
    [
      ("A", "Vasodilatação periférica e aumento da diurese."),
      ("B", "Vasoconstrição, estímulo à liberação de aldosterona e retenção de sódio e água."),
      ("C", "Inibição da secreção de ADH e aumento da excreção de potássio."),
      ("D", "Diminuição da frequência cardíaca e broncodilatação."),
      ("E", "Estimulação da natriurese e redução do volume plasmático."),
    ],
    "B",
    "A angiotensina II é um potente vasoconstritor que também estimula a liberação de aldosterona pelo córtex adrenal, promovendo retenção de Na+ e água nos túbulos renais, aumentando o volume plasmático e a pressão arterial. Os IECA (captopril, enalapril) bloqueiam a ECA, reduzindo esses efeitos."
  ),

  // Santa Casa SP 2024
  question!(
    "SANTA_CASA_2024_Q01", "SANTA_CASA", "Santa Casa SP 2024", 2024, 1,
    "Biologia", "Embriologia", Easy,
    "Durante o desenvolvimento embrionário humano, a gastrulação é um processo fundamental que estabelece os três folhetos germinativos: ectoderma, mesoderma e endoderma. Cada folheto dará origem a tecidos e órgãos específicos. O sistema nervoso central e a epiderme derivam do:",
    [
      ("A", "Endoderma."),
      ("B", "Mesoderma."),
      ("C", "Ectoderma."),
      ("D", "Mesoderma e endoderma."),
      ("E", "Endoderma e ectoderma."),
    ],
    "C",
    "O ectoderma origina o sistema nervoso central (tubo neural), a epiderme e seus anexos (pelos, unhas, glândulas sebáceas e sudoríparas), o cristalino e o esmalte dentário. O mesoderma origina músculos, ossos, sangue, rins. O endoderma origina o epitélio do trato digestivo e respiratório."
  ),
  question!(
    "SANTA_CASA_2024_Q02", "SANTA_CASA", "Santa Casa SP 2024", 2024, 2,
    "Biologia", "Fisiologia Humana", Hard,
    "A hemoglobina é uma proteína tetramérica presente nos eritrócitos, responsável pelo transporte de oxigênio dos pulmões aos tecidos. A curva de dissociação da oxiemoglobina tem formato sigmoide, refletindo a cooperatividade na ligação do O2. O desvio da curva para a direita (efeito Bohr) ocorre quando há:",
    [
      ("A", "Aumento do pH e diminuição da temperatura."),
      ("B", "Diminuição do pH, aumento da pCO2 e aumento da temperatura."),
      ("C", "Aumento do pH e diminuição do 2,3-DPG."),
      ("D", "Diminuição da pCO2 e aumento do pH."),
      ("E", "Presença de hemoglobina fetal (HbF)."),
    ],
    "B",
    "O efeito Bohr descreve o desvio da curva para a direita (menor afinidade Hb-O2, maior liberação de O2 nos tecidos) em condições de: pH baixo (acidose), pCO2 elevada, temperatura elevada e aumento de 2,3-DPG. Isso é fisiologicamente importante nos tecidos metabolicamente ativos."
  ),

  // UNIVAG 2024
  question!(
    "UNIVAG_2024_Q01", "UNIVAG", "UNIVAG 2024", 2024, 1,
    "Biologia", "Anatomia", Easy,
    "O coração humano é um órgão muscular dividido em quatro câmaras: dois átrios e dois ventrículos. O sangue venoso (pobre em O2) retorna ao coração pelas veias cavas superior e inferior, entrando no átrio direito. A sequência correta do fluxo sanguíneo através do coração e pulmões é:",
    [
      ("A", "Átrio direito → Ventrículo direito → Artérias pulmonares → Pulmões → Veias pulmonares → Átrio esquerdo → Ventrículo esquerdo → Aorta."),
      ("B", "Átrio direito → Ventrículo esquerdo → Artérias pulmonares → Pulmões → Veias pulmonares → Átrio esquerdo → Ventrículo direito → Aorta."),
      ("C", "Átrio esquerdo → Ventrículo esquerdo → Artérias pulmonares → Pulmões → Veias pulmonares → Átrio direito → Ventrículo direito → Aorta."),
      ("D", "Ventrículo direito → Átrio direito → Veias pulmonares → Pulmões → Artérias pulmonares → Ventrículo esquerdo → Átrio esquerdo → Aorta."),
      ("E", "Átrio direito → Ventrículo direito → Veias pulmonares → Pulmões → Artérias pulmonares → Átrio esquerdo → Ventrículo esquerdo → Aorta."),
    ],
    "A",
    "O fluxo sanguíneo segue: veias cavas → AD → VD → artérias pulmonares → pulmões (hematose) → veias pulmonares → AE → VE → aorta → circulação sistêmica. As artérias pulmonares levam sangue venoso e as veias pulmonares trazem sangue arterial."
  ),

  // PUC-SP 2024
  question!(
    "PUC_SP_2024_Q01", "PUC_SP", "PUC-SP 2024", 2024, 1,
    "Biologia", "Biologia Celular", Medium,
    "O retículo endoplasmático (RE) é uma organela fundamental para a síntese e processamento de proteínas e lipídios. O RE rugoso (RER) possui ribossomos aderidos à sua superfície e é responsável pela síntese de proteínas destinadas à secreção, membrana plasmática e lisossomos. O RE liso (REL) está envolvido na síntese de lipídios e no metabolismo de carboidratos. Uma função específica do REL nos hepatócitos é:",
    [
      ("A", "Síntese de proteínas plasmáticas como a albumina."),
      ("B", "Detoxificação de drogas e substâncias tóxicas."),
      ("C", "Digestão intracelular de macromoléculas."),
      ("D", "Produção de ATP por fosforilação oxidativa."),
      ("E", "Replicação do DNA nuclear."),
    ],
    "B",
    "O REL nos hepatócitos é especialmente desenvolvido e responsável pela detoxificação de drogas, álcool e substâncias tóxicas através de enzimas do citocromo P450. Também participa do metabolismo do glicogênio e da síntese de colesterol e hormônios esteroides."
  ),

  // Einstein 2024
  question!(
    "EINSTEIN_2024_Q01", "EINSTEIN", "Einstein 2024", 2024, 1,
    "Biologia", "Biologia Molecular", Hard,
    "A replicação do DNA é um processo semiconservativo que ocorre durante a fase S do ciclo celular. A enzima DNA polimerase III sintetiza a nova fita de DNA na direção 5' → 3', utilizando a fita molde como guia. Na fita descontínua (lagging strand), a síntese ocorre em fragmentos chamados de Okazaki. Para a remoção dos primers de RNA e a ligação dos fragmentos, são necessárias, respectivamente:",
    [
      ("A", "Helicase e topoisomerase."),
      ("B", "Primase e RNA polimerase."),
      ("C", "DNA polimerase I e DNA ligase."),
      ("D", "Telomerase e exonuclease."),
      ("E", "Girase e SSB proteins."),
    ],
    "C",
    "A DNA polimerase I remove os primers de RNA (atividade exonuclease 5'→3') e preenche as lacunas com DNA. A DNA ligase então une os fragmentos de Okazaki, selando as ligações fosfodiéster entre eles. A helicase abre a dupla fita, a primase sintetiza os primers, e a topoisomerase alivia a tensão torsional."
  ),
  question!(
    "EINSTEIN_2024_Q02", "EINSTEIN", "Einstein 2024", 2024, 2,
    "Química", "Bioquímica", Medium,
    "Os lipídios são biomoléculas essenciais que desempenham funções estruturais, energéticas e regulatórias. Os fosfolipídios são os principais componentes das membranas biológicas e possuem caráter anfipático, com uma cabeça polar (hidrofílica) e caudas apolares (hidrofóbicas). A fluidez da membrana plasmática é influenciada por:",
    [
      ("A", "Apenas a temperatura do meio."),
      ("B", "O grau de insaturação dos ácidos graxos e a presença de colesterol."),
      ("C", "Apenas a concentração de proteínas integrais."),
      ("D", "O tamanho das moléculas de glicose no glicocálice."),
      ("E", "A quantidade de ribossomos aderidos à membrana."),
    ],
    "B",
    "A fluidez da membrana depende: (1) do grau de insaturação dos ácidos graxos — insaturados (com duplas ligações) aumentam a fluidez por impedir o empacotamento; (2) do colesterol — em temperaturas altas reduz a fluidez, em temperaturas baixas impede a solidificação; (3) do comprimento das cadeias de ácidos graxos."
  ),

  // UNICAMP 2024
  question!(
    "UNICAMP_2024_Q01", "UNICAMP", "UNICAMP 2024", 2024, 1,
    "Biologia", "Ecologia", Easy,
    "A sucessão ecológica é o processo de mudanças graduais na composição de espécies de uma comunidade ao longo do tempo. Na sucessão primária, a colonização ocorre em ambientes sem solo formado, como rochas nuas ou lavas vulcânicas. Os organismos pioneiros que iniciam a sucessão primária são tipicamente:",
    [
      ("A", "Árvores de grande porte que fornecem sombra."),
      ("B", "Líquens e musgos que colonizam superfícies rochosas."),
      ("C", "Mamíferos herbívoros que dispersam sementes."),
      ("D", "Fungos decompositores que formam o húmus."),
      ("E", "Peixes que colonizam poças de água formadas na rocha."),
    ],
    "B",
    "Na sucessão primária, líquens são os organismos pioneiros que colonizam rochas nuas. Eles produzem ácidos que decompõem a rocha, iniciando a formação do solo. Musgos se estabelecem em seguida, acumulando matéria orgânica. Gradualmente, plantas herbáceas, arbustos e árvores se estabelecem."
  ),

  // UNIFESP 2024
  question!(
    "UNIFESP_2024_Q01", "UNIFESP", "UNIFESP 2024", 2024, 1,
    "Biologia", "Fisiologia Humana", Medium,
    "O potencial de ação é o mecanismo pelo qual os neurônios transmitem sinais elétricos. Em repouso, o neurônio mantém um potencial de membrana de aproximadamente -70 mV. Quando um estímulo atinge o limiar de excitação, ocorre a abertura de canais de sódio voltagem-dependentes, permitindo o influxo rápido de Na+. Esse processo é chamado de despolarização. A repolarização subsequente ocorre pela:",
    [
      ("A", "Abertura de canais de cálcio e influxo de Ca2+."),
      ("B", "Abertura de canais de potássio e efluxo de K+."),
      ("C", "Fechamento de todos os canais iônicos simultaneamente."),
      ("D", "Ativação da bomba de Na+/K+ exclusivamente."),
      ("E", "Influxo de íons cloreto (Cl-)."),
    ],
    "B",
    "A repolarização ocorre pela abertura de canais de K+ voltagem-dependentes, que permitem o efluxo de K+ (saída de cargas positivas), restaurando o potencial negativo. Os canais de Na+ se inativam. A bomba Na+/K+ ATPase restaura os gradientes iônicos a longo prazo, mas não é responsável pela repolarização rápida."
  ),

  // ENEM 2023
  question!(
    "ENEM_2023_Q03", "ENEM", "ENEM 2023", 2023, 3,
    "Química", "Química Orgânica", Easy,
    "Os carboidratos são biomoléculas essenciais que servem como fonte de energia e componentes estruturais. A sacarose (açúcar de mesa) é um dissacarídeo formado pela união de uma molécula de glicose e uma de frutose. A hidrólise da sacarose produz:",
    [
      ("A", "Duas moléculas de glicose."),
      ("B", "Uma molécula de glicose e uma de galactose."),
      ("C", "Uma molécula de glicose e uma de frutose."),
      ("D", "Duas moléculas de frutose."),
      ("E", "Uma molécula de maltose e uma de água."),
    ],
    "C",
    "A sacarose é formada por glicose + frutose unidas por ligação glicosídica α-1,2. Sua hidrólise (pela enzima sacarase/invertase) libera uma molécula de glicose e uma de frutose. A lactose = glicose + galactose. A maltose = glicose + glicose."
  ),

  // Santa Casa SP 2023
  question!(
    "SANTA_CASA_2023_Q01", "SANTA_CASA", "Santa Casa SP 2023", 2023, 1,
    "Biologia", "Genética", Easy,
    "O cariótipo humano normal é composto por 46 cromossomos (23 pares), sendo 22 pares de autossomos e 1 par de cromossomos sexuais. A síndrome de Down é causada pela trissomia do cromossomo 21, geralmente resultante de não-disjunção durante a meiose. A probabilidade de não-disjunção aumenta com:",
    [
      ("A", "A idade paterna avançada exclusivamente."),
      ("B", "A idade materna avançada, especialmente acima de 35 anos."),
      ("C", "A exposição a antibióticos durante a gestação."),
      ("D", "A deficiência de ácido fólico na dieta materna."),
      ("E", "O grupo sanguíneo da mãe."),
    ],
    "B",
    "A idade materna avançada (>35 anos) é o principal fator de risco para trissomia do 21, pois os oócitos permanecem parados na meiose I desde o nascimento e acumulam erros de segregação cromossômica ao longo dos anos. A incidência aumenta de 1:1.000 aos 30 anos para 1:100 aos 40 anos."
  ),

  // PUC-SP 2023
  question!(
    "PUC_SP_2023_Q01", "PUC_SP", "PUC-SP 2023", 2023, 1,
    "Biologia", "Microbiologia", Medium,
    "Os vírus são agentes infecciosos que dependem da maquinaria celular do hospedeiro para se replicar. O ciclo lítico viral resulta na destruição da célula hospedeira, enquanto o ciclo lisogênico envolve a integração do genoma viral ao DNA do hospedeiro. Um exemplo de vírus que pode realizar ambos os ciclos é:",
    [
      ("A", "O vírus da gripe (Influenza)."),
      ("B", "O bacteriófago lambda (λ)."),
      ("C", "O vírus do mosaico do tabaco (TMV)."),
      ("D", "O vírus da raiva."),
      ("E", "O vírus Ebola."),
    ],
    "B",
    "O bacteriófago lambda (λ) é o exemplo clássico de vírus temperado que pode alternar entre ciclo lítico (replicação e lise da bactéria) e ciclo lisogênico (integração do DNA viral ao cromossomo bacteriano como profago). O HIV também pode realizar ambos os ciclos em células T CD4+."
  ),

  // Einstein 2023
  question!(
    "EINSTEIN_2023_Q01", "EINSTEIN", "Einstein 2023", 2023, 1,
    "Biologia", "Biologia Molecular", Easy,
    "O código genético é a correspondência entre os códons do mRNA e os aminoácidos das proteínas. O código genético é degenerado (redundante), o que significa que:",
    [
      ("A", "Um mesmo códon pode codificar diferentes aminoácidos."),
      ("B", "Diferentes códons podem codificar o mesmo aminoácido."),
      ("C", "Alguns aminoácidos não possuem códons correspondentes."),
      ("D", "O código genético varia entre espécies diferentes."),
      ("E", "Cada aminoácido é codificado por apenas um códon."),
    ],
    "B",
    "O código genético é degenerado porque a maioria dos aminoácidos é codificada por mais de um códon (ex: leucina tem 6 códons). Isso ocorre principalmente pela variação na terceira posição do códon (wobble). O código é universal (quase idêntico em todos os seres vivos) e não ambíguo (cada códon codifica apenas um aminoácido)."
  ),

  // UNIVAG 2023
  question!(
    "UNIVAG_2023_Q01", "UNIVAG", "UNIVAG 2023", 2023, 1,
    "Biologia", "Fisiologia Humana", Easy,
    "O sistema digestório humano é responsável pela digestão mecânica e química dos alimentos. A digestão química das proteínas inicia-se no estômago pela ação da pepsina, que é ativada em pH ácido (1,5-2,0). O ácido clorídrico (HCl) é produzido pelas células parietais do estômago. A função do HCl gástrico inclui:",
    [
      ("A", "Digerir diretamente as proteínas em aminoácidos."),
      ("B", "Ativar o pepsinogênio em pepsina e criar pH ótimo para sua ação."),
      ("C", "Emulsificar as gorduras para ação da lipase."),
      ("D", "Neutralizar o quimo ácido que chega do esôfago."),
      ("E", "Absorver ferro e vitamina B12 diretamente."),
    ],
    "B",
    "O HCl gástrico tem múltiplas funções: (1) ativa o pepsinogênio (zimogênio inativo) em pepsina (enzima ativa); (2) mantém o pH ácido ideal (1,5-2,0) para a ação da pepsina; (3) desnatura proteínas; (4) ação bactericida. A emulsificação de gorduras é feita pela bile no duodeno."
  ),

  // FUVEST/USP 2022
  question!(
    "FUVEST_2022_Q01", "FUVEST", "FUVEST/USP 2022", 2022, 1,
    "Biologia", "Ecologia", Easy,
    "As relações ecológicas entre espécies podem ser classificadas em intraespecíficas e interespecíficas. O mutualismo é uma relação interespecífica em que ambas as espécies se beneficiam. Um exemplo clássico de mutualismo obrigatório é:",
    [
      ("A", "A relação entre tubarão e rêmora."),
      ("B", "A relação entre líquens (fungo + alga/cianobactéria)."),
      ("C", "A relação entre leão e hiena."),
      ("D", "A relação entre orquídea e árvore."),
      ("E", "A relação entre gado e garça-vaqueira."),
    ],
    "B",
    "Os líquens são o exemplo clássico de mutualismo obrigatório: o fungo fornece proteção e umidade, enquanto a alga/cianobactéria realiza fotossíntese e fornece matéria orgânica. Nenhum dos dois sobrevive isoladamente na natureza. Tubarão-rêmora = comensalismo. Orquídea-árvore = epifitismo. Gado-garça = protocooperação."
  ),
];

/// Exam sources, in display order.
pub fn seed_sources() -> Vec<SourceDescriptor> {
  SOURCES
    .iter()
    .map(|s| SourceDescriptor {
      id: s.id.into(),
      label: s.label.into(),
      description: s.description.into(),
      color: s.color.into(),
      coverage: s.coverage.into(),
    })
    .collect()
}

pub fn seed_subjects() -> Vec<String> {
  SUBJECTS.iter().map(|s| s.to_string()).collect()
}

/// All built-in questions, in authored order (grouped by source and year).
pub fn seed_questions() -> Vec<Question> {
  QUESTIONS.iter().map(to_question).collect()
}

fn to_question(d: &QuestionDef) -> Question {
  Question {
    id: d.id.into(),
    source: d.source.into(),
    source_label: d.source_label.into(),
    year: d.year,
    number: d.number,
    subject: d.subject.into(),
    topic: d.topic.into(),
    text: d.text.into(),
    options: d
      .options
      .iter()
      .map(|(letter, text)| AnswerOption { letter: (*letter).into(), text: (*text).into() })
      .collect(),
    correct_answer: d.correct_answer.into(),
    explanation: d.explanation.into(),
    difficulty: d.difficulty,
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn authored_table_sizes() {
    assert_eq!(seed_questions().len(), 28);
    assert_eq!(seed_sources().len(), 8);
    assert_eq!(seed_subjects().len(), 16);
  }

  #[test]
  fn ids_follow_canonical_scheme() {
    for q in seed_questions() {
      assert_eq!(q.id, Question::canonical_id(&q.source, q.year, q.number), "id mismatch for {}", q.id);
    }
  }

  #[test]
  fn source_labels_carry_the_year() {
    for q in seed_questions() {
      assert!(q.source_label.ends_with(&q.year.to_string()), "{} -> {}", q.id, q.source_label);
    }
  }

  #[test]
  fn first_question_is_enem_2024_mrna() {
    let qs = seed_questions();
    let q = &qs[0];
    assert_eq!(q.id, "ENEM_2024_Q01");
    assert_eq!(q.topic, "Sistema Imunológico");
    assert_eq!(q.options.len(), 5);
    assert_eq!(q.correct_answer, "B");
    assert_eq!(q.difficulty, Difficulty::Medium);
  }
}
