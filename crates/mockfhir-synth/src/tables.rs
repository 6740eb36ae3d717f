//! Enumerated option tables the generators select from.
//!
//! Table order is load-bearing: selections are hash indexes into these
//! arrays, so reordering or resizing a table changes every generated
//! fixture.

pub struct CodeDisplay {
    pub code: &'static str,
    pub display: &'static str,
}

pub struct CodedConcept {
    pub code: &'static str,
    pub display: &'static str,
    pub text: &'static str,
}

pub struct ConditionCodes {
    pub icd10: CodeDisplay,
    pub snomed: CodeDisplay,
    pub icd9: CodeDisplay,
    pub text: &'static str,
}

pub const MEDICAL_CONDITIONS: [ConditionCodes; 15] = [
    ConditionCodes {
        icd10: CodeDisplay { code: "I10", display: "Essential (primary) hypertension" },
        snomed: CodeDisplay { code: "38341003", display: "Hypertensive Disorder" },
        icd9: CodeDisplay { code: "401.9", display: "Hypertension" },
        text: "Hypertension",
    },
    ConditionCodes {
        icd10: CodeDisplay { code: "E11.9", display: "Type 2 diabetes mellitus without complications" },
        snomed: CodeDisplay { code: "44054006", display: "Diabetes mellitus type 2" },
        icd9: CodeDisplay { code: "250.00", display: "Diabetes mellitus without mention of complication" },
        text: "Type 2 Diabetes",
    },
    ConditionCodes {
        icd10: CodeDisplay { code: "M81.0", display: "Age-related osteoporosis without current pathological fracture" },
        snomed: CodeDisplay { code: "64859006", display: "Osteoporosis" },
        icd9: CodeDisplay { code: "733.00", display: "Osteoporosis" },
        text: "Osteoporosis",
    },
    ConditionCodes {
        icd10: CodeDisplay { code: "J44.1", display: "Chronic obstructive pulmonary disease with acute exacerbation" },
        snomed: CodeDisplay { code: "13645005", display: "Chronic obstructive lung disease" },
        icd9: CodeDisplay { code: "496", display: "Chronic airway obstruction" },
        text: "COPD",
    },
    ConditionCodes {
        icd10: CodeDisplay { code: "M79.3", display: "Panniculitis, unspecified" },
        snomed: CodeDisplay { code: "23878001", display: "Fibromyalgia" },
        icd9: CodeDisplay { code: "729.1", display: "Myalgia and myositis" },
        text: "Fibromyalgia",
    },
    ConditionCodes {
        icd10: CodeDisplay { code: "K21.9", display: "Gastro-esophageal reflux disease without esophagitis" },
        snomed: CodeDisplay { code: "235595009", display: "Gastroesophageal reflux disease" },
        icd9: CodeDisplay { code: "530.81", display: "Esophageal reflux" },
        text: "GERD",
    },
    ConditionCodes {
        icd10: CodeDisplay { code: "E78.5", display: "Hyperlipidemia, unspecified" },
        snomed: CodeDisplay { code: "55822004", display: "Hyperlipidemia" },
        icd9: CodeDisplay { code: "272.4", display: "Other and unspecified hyperlipidemia" },
        text: "Hyperlipidemia",
    },
    ConditionCodes {
        icd10: CodeDisplay { code: "G47.33", display: "Obstructive sleep apnea" },
        snomed: CodeDisplay { code: "73443001", display: "Sleep apnea" },
        icd9: CodeDisplay { code: "780.57", display: "Sleep apnea" },
        text: "Sleep Apnea",
    },
    ConditionCodes {
        icd10: CodeDisplay { code: "M25.511", display: "Pain in right shoulder" },
        snomed: CodeDisplay { code: "298705000", display: "Pain in shoulder" },
        icd9: CodeDisplay { code: "719.41", display: "Pain in joint, shoulder region" },
        text: "Shoulder Pain",
    },
    ConditionCodes {
        icd10: CodeDisplay { code: "M54.5", display: "Low back pain" },
        snomed: CodeDisplay { code: "161891005", display: "Low back pain" },
        icd9: CodeDisplay { code: "724.2", display: "Low back pain" },
        text: "Low Back Pain",
    },
    ConditionCodes {
        icd10: CodeDisplay { code: "F41.9", display: "Anxiety disorder, unspecified" },
        snomed: CodeDisplay { code: "48694002", display: "Anxiety disorder" },
        icd9: CodeDisplay { code: "300.00", display: "Anxiety state" },
        text: "Anxiety",
    },
    ConditionCodes {
        icd10: CodeDisplay { code: "F32.9", display: "Major depressive disorder, single episode, unspecified" },
        snomed: CodeDisplay { code: "35489007", display: "Depressive disorder" },
        icd9: CodeDisplay { code: "296.20", display: "Major depressive affective disorder" },
        text: "Depression",
    },
    ConditionCodes {
        icd10: CodeDisplay { code: "K59.00", display: "Constipation, unspecified" },
        snomed: CodeDisplay { code: "14760008", display: "Constipation" },
        icd9: CodeDisplay { code: "564.00", display: "Constipation" },
        text: "Constipation",
    },
    ConditionCodes {
        icd10: CodeDisplay { code: "N18.6", display: "End stage renal disease" },
        snomed: CodeDisplay { code: "42399005", display: "Chronic kidney disease" },
        icd9: CodeDisplay { code: "585.9", display: "Chronic kidney disease" },
        text: "Chronic Kidney Disease",
    },
    ConditionCodes {
        icd10: CodeDisplay { code: "I25.10", display: "Atherosclerotic heart disease of native coronary artery without angina pectoris" },
        snomed: CodeDisplay { code: "53741008", display: "Coronary artery disease" },
        icd9: CodeDisplay { code: "414.00", display: "Coronary atherosclerosis" },
        text: "Coronary Artery Disease",
    },
];

pub const CLINICAL_STATUSES: [CodedConcept; 4] = [
    CodedConcept { code: "active", display: "Active", text: "Active" },
    CodedConcept { code: "recurrence", display: "Recurrence", text: "Recurrence" },
    CodedConcept { code: "remission", display: "Remission", text: "Remission" },
    CodedConcept { code: "inactive", display: "Inactive", text: "Inactive" },
];

pub const VERIFICATION_STATUSES: [CodedConcept; 3] = [
    CodedConcept { code: "confirmed", display: "Confirmed", text: "Confirmed" },
    CodedConcept { code: "unconfirmed", display: "Unconfirmed", text: "Unconfirmed" },
    CodedConcept { code: "refuted", display: "Refuted", text: "Refuted" },
];

pub const CONDITION_CATEGORIES: [CodedConcept; 2] = [
    CodedConcept { code: "problem-list-item", display: "Problem List Item", text: "Problem List Item" },
    CodedConcept { code: "encounter-diagnosis", display: "Encounter Diagnosis", text: "Encounter Diagnosis" },
];

pub const FIRST_NAMES: [&str; 40] = [
    "James", "Mary", "Robert", "Patricia", "John", "Jennifer", "Michael", "Linda",
    "David", "Elizabeth", "William", "Barbara", "Richard", "Susan", "Joseph", "Jessica",
    "Thomas", "Sarah", "Christopher", "Karen", "Daniel", "Nancy", "Matthew", "Lisa",
    "Anthony", "Betty", "Mark", "Margaret", "Donald", "Sandra", "Steven", "Ashley",
    "Paul", "Kimberly", "Andrew", "Emily", "Joshua", "Donna", "Kenneth", "Michelle",
];

pub const LAST_NAMES: [&str; 32] = [
    "Smith", "Johnson", "Williams", "Brown", "Jones", "Garcia", "Miller", "Davis",
    "Rodriguez", "Martinez", "Hernandez", "Lopez", "Wilson", "Anderson", "Thomas", "Taylor",
    "Moore", "Jackson", "Martin", "Lee", "Thompson", "White", "Harris", "Clark",
    "Lewis", "Robinson", "Walker", "Young", "Allen", "King", "Wright", "Scott",
];

pub const US_CITIES: [(&str, &str, &str); 20] = [
    ("Chicago", "IL", "60601"), ("New York", "NY", "10001"), ("Los Angeles", "CA", "90001"),
    ("Houston", "TX", "77001"), ("Phoenix", "AZ", "85001"), ("Philadelphia", "PA", "19101"),
    ("San Antonio", "TX", "78201"), ("San Diego", "CA", "92101"), ("Dallas", "TX", "75201"),
    ("San Jose", "CA", "95101"), ("Austin", "TX", "78701"), ("Jacksonville", "FL", "32099"),
    ("Fort Worth", "TX", "76101"), ("Columbus", "OH", "43201"), ("Charlotte", "NC", "28201"),
    ("San Francisco", "CA", "94101"), ("Indianapolis", "IN", "46201"), ("Seattle", "WA", "98101"),
    ("Denver", "CO", "80201"), ("Boston", "MA", "02101"),
];

pub const STREET_NAMES: [&str; 8] = ["Main", "Oak", "Park", "First", "Second", "Maple", "Cedar", "Elm"];

pub const ORG_STREET_NAMES: [&str; 5] = ["Medical", "Hospital", "Health", "Care", "Center"];

pub const INSURANCE_TYPES: [&str; 4] = ["PPO", "HMO", "EPO", "Medicare Advantage"];

pub const INSURANCE_NAMES: [&str; 6] = [
    "Aetna", "Blue Cross Blue Shield", "UnitedHealthcare", "Cigna", "Humana", "Kaiser Permanente",
];

pub const HOSPITAL_NAMES: [&str; 10] = [
    "Regional Medical Center", "Community Hospital", "General Health System",
    "Metropolitan Medical Center", "Valley Hospital", "Memorial Hospital",
    "City Medical Center", "Riverside Hospital", "University Medical Center",
    "Central Hospital",
];

pub const MARITAL_STATUSES: [&str; 4] = ["Married", "Single", "Divorced", "Widowed"];

pub const ENCOUNTER_CLASSES: [CodeDisplay; 5] = [
    CodeDisplay { code: "AMB", display: "Ambulatory" },
    CodeDisplay { code: "EMER", display: "Emergency" },
    CodeDisplay { code: "IMP", display: "Inpatient" },
    CodeDisplay { code: "OBSENC", display: "Observation" },
    CodeDisplay { code: "AMB", display: "Outpatient" },
];

pub const ENCOUNTER_TYPES: [CodedConcept; 4] = [
    CodedConcept { code: "102", display: "Outpatient", text: "Outpatient" },
    CodedConcept { code: "101", display: "Inpatient", text: "Inpatient" },
    CodedConcept { code: "103", display: "Emergency", text: "Emergency" },
    CodedConcept { code: "104", display: "Urgent Care", text: "Urgent Care" },
];

pub const ENCOUNTER_STATUSES: [&str; 7] = [
    "planned", "arrived", "triaged", "in-progress", "onleave", "finished", "cancelled",
];

pub const PARTICIPANT_TYPES: [CodeDisplay; 3] = [
    CodeDisplay { code: "ATND", display: "attender" },
    CodeDisplay { code: "REF", display: "referrer" },
    CodeDisplay { code: "CON", display: "consultant" },
];

pub struct Specialty {
    pub name: &'static str,
    pub code: &'static str,
    pub display: &'static str,
}

pub const PRACTITIONER_SPECIALTIES: [Specialty; 6] = [
    Specialty { name: "Cardiology", code: "207RC0000X", display: "Cardiologist" },
    Specialty { name: "Internal Medicine", code: "207RI0001X", display: "Internal Medicine" },
    Specialty { name: "Family Practice", code: "208D00000X", display: "Family Physician" },
    Specialty { name: "Pediatrics", code: "208000000X", display: "Pediatrician" },
    Specialty { name: "Orthopedics", code: "207XX0005X", display: "Orthopedic Surgeon" },
    Specialty { name: "General Surgery", code: "208600000X", display: "Surgeon" },
];

/// (family, given) pairs.
pub const PRACTITIONER_NAMES: [(&str, &str); 10] = [
    ("Smith", "John"), ("Johnson", "Sarah"), ("Williams", "Michael"), ("Brown", "Emily"),
    ("Jones", "David"), ("Garcia", "Maria"), ("Miller", "Robert"), ("Davis", "Jennifer"),
    ("Rodriguez", "James"), ("Martinez", "Patricia"),
];

pub const PROCEDURE_CATEGORIES: [CodedConcept; 3] = [
    CodedConcept { code: "387713003", display: "Surgical procedure", text: "Surgical History" },
    CodedConcept { code: "103693007", display: "Diagnostic procedure", text: "Diagnostic" },
    CodedConcept { code: "409073007", display: "Evaluation procedure", text: "Evaluation" },
];

pub const PROCEDURE_CODES: [&str; 12] = [
    "CESAREAN SECTION", "APPENDECTOMY", "CHOLECYSTECTOMY", "HYSTERECTOMY",
    "Knee Replacement", "Hip Replacement", "Cataract Surgery", "Angioplasty",
    "Colonoscopy", "Endoscopy", "Cardiac Catheterization", "Mastectomy",
];

pub const PROCEDURE_STATUSES: [&str; 8] = [
    "preparation", "in-progress", "not-done", "on-hold", "stopped", "completed",
    "entered-in-error", "unknown",
];

pub const OBSERVATION_CATEGORIES: [CodedConcept; 4] = [
    CodedConcept { code: "laboratory", display: "Laboratory", text: "Laboratory" },
    CodedConcept { code: "vital-signs", display: "Vital Signs", text: "Vital Signs" },
    CodedConcept { code: "imaging", display: "Imaging", text: "Imaging" },
    CodedConcept { code: "survey", display: "Survey", text: "Survey" },
];

pub const OBSERVATION_CODES: [CodedConcept; 6] = [
    CodedConcept { code: "85354-9", display: "Blood Pressure", text: "Blood Pressure" },
    CodedConcept { code: "8867-4", display: "Heart Rate", text: "Heart Rate" },
    CodedConcept { code: "9279-1", display: "Respiratory Rate", text: "Respiratory Rate" },
    CodedConcept { code: "8310-5", display: "Body Temperature", text: "Body Temperature" },
    CodedConcept { code: "2339-0", display: "Glucose", text: "Glucose" },
    CodedConcept { code: "789-8", display: "Red Blood Cell Count", text: "RBC Count" },
];

pub const OBSERVATION_STATUSES: [&str; 8] = [
    "registered", "preliminary", "final", "amended", "corrected", "cancelled",
    "entered-in-error", "unknown",
];

pub const PROVENANCE_AGENT_TYPES: [CodedConcept; 4] = [
    CodedConcept { code: "author", display: "Author", text: "Author" },
    CodedConcept { code: "enterer", display: "Enterer", text: "Enterer" },
    CodedConcept { code: "verifier", display: "Verifier", text: "Verifier" },
    CodedConcept { code: "transmitter", display: "Transmitter", text: "Transmitter" },
];

pub const CONSENT_SCOPES: [CodedConcept; 5] = [
    CodedConcept { code: "2000", display: "Consent Form", text: "Consent Form" },
    CodedConcept { code: "11", display: "Power of Attorney", text: "Power of Attorney" },
    CodedConcept { code: "12", display: "HIPAA Notice of Privacy", text: "HIPAA Notice of Privacy" },
    CodedConcept { code: "13", display: "Advanced Directive", text: "Advanced Directive" },
    CodedConcept { code: "14", display: "Research Consent", text: "Research Consent" },
];

pub const CONSENT_STATUSES: [&str; 5] = ["draft", "proposed", "active", "rejected", "inactive"];

pub struct DocumentType {
    pub code: &'static str,
    pub display: &'static str,
    pub text: &'static str,
    pub loinc: CodeDisplay,
}

pub const DOCUMENT_TYPES: [DocumentType; 5] = [
    DocumentType {
        code: "1",
        display: "Progress Notes",
        text: "Progress Notes",
        loinc: CodeDisplay { code: "11506-3", display: "Progress note" },
    },
    DocumentType {
        code: "2",
        display: "Discharge Summary",
        text: "Discharge Summary",
        loinc: CodeDisplay { code: "18842-5", display: "Discharge summary" },
    },
    DocumentType {
        code: "3",
        display: "Lab Results",
        text: "Lab Results",
        loinc: CodeDisplay { code: "26436-6", display: "Laboratory studies" },
    },
    DocumentType {
        code: "4",
        display: "Imaging Report",
        text: "Imaging Report",
        loinc: CodeDisplay { code: "18726-0", display: "Radiology studies" },
    },
    DocumentType {
        code: "5",
        display: "Consultation Note",
        text: "Consultation Note",
        loinc: CodeDisplay { code: "11488-4", display: "Consult note" },
    },
];

pub const DOCUMENT_CATEGORIES: [CodedConcept; 3] = [
    CodedConcept { code: "clinical-note", display: "Clinical Note", text: "Clinical Note" },
    CodedConcept { code: "lab-report", display: "Lab Report", text: "Lab Report" },
    CodedConcept { code: "imaging-report", display: "Imaging Report", text: "Imaging Report" },
];

pub const DOCUMENT_STATUSES: [&str; 3] = ["current", "superseded", "entered-in-error"];

pub const DOC_STATUSES: [&str; 5] = ["preliminary", "final", "amended", "entered-in-error", "unknown"];

pub const BINARY_CONTENT_TYPES: [&str; 5] = [
    "text/rtf", "text/html", "application/pdf", "application/xml", "text/plain",
];
